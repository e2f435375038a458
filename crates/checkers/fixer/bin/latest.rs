// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Live contract check against the Fixer latest-rates endpoint.
//!
//! Exit codes: 0 contract holds, 1 contract violated, 2 infrastructure
//! failure (the run produced no contract verdict).

use anyhow::{Context, Result};
use tracing::{error, info};

use fixer_contract::common::credential::FixerCredential;
use fixer_contract::config::FixerConfig;
use fixer_contract::contract::{check_latest_contract, ContractChecker};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let credential = FixerCredential::from_env().context("loading the API access key")?;
    let config = FixerConfig::default();

    info!("Checking latest-rates contract at {}", config.base_url);

    let checker = ContractChecker::new(&config)?;
    let response = match checker.fetch_latest(&credential.access_key).await {
        Ok(response) => response,
        Err(e) if e.is_retryable() => {
            error!("transport failure (transient, no contract verdict): {e}");
            std::process::exit(2);
        }
        Err(e) => {
            error!("request failed: {e}");
            std::process::exit(2);
        }
    };

    info!(status = response.status, "captured response");

    let violations = check_latest_contract(&response);
    if violations.is_empty() {
        info!("latest-rates contract holds");
        return Ok(());
    }

    for violation in &violations {
        error!("{violation}");
    }
    error!("{} contract violation(s)", violations.len());
    std::process::exit(1);
}
