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

//! Credential configuration for the Fixer API.
//!
//! The one secret is the access key. It is sourced from the environment (or
//! built explicitly in tests) and is never hard-coded in shipped code.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::FixerError;

/// Environment variable holding the valid API access key.
pub const ACCESS_KEY_ENV: &str = "FIXER_ACCESS_KEY";

/// Fixer API credential.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct FixerCredential {
    pub access_key: String,
}

impl FixerCredential {
    pub fn builder() -> FixerCredentialBuilder {
        FixerCredentialBuilder::default()
    }

    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
        }
    }

    /// Reads the access key from `FIXER_ACCESS_KEY`.
    pub fn from_env() -> Result<Self, FixerError> {
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .map_err(|_| FixerError::ConfigError(format!("{ACCESS_KEY_ENV} is not set")))?;
        Ok(Self { access_key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_builder() {
        let cred = FixerCredential::builder()
            .access_key("953a6948da5d998c7565867c5c5aef94")
            .build()
            .unwrap();

        assert_eq!(cred.access_key, "953a6948da5d998c7565867c5c5aef94");
    }

    #[test]
    fn test_credential_from_env_missing() {
        std::env::remove_var(ACCESS_KEY_ENV);
        let result = FixerCredential::from_env();
        assert!(matches!(result, Err(FixerError::ConfigError(_))));
    }
}
