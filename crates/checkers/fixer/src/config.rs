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

//! Configuration structures for the Fixer contract checker.
//!
//! All configuration is passed explicitly into the checker at construction;
//! there is no ambient global state.

use serde::{Deserialize, Serialize};

use crate::common::urls::DEFAULT_BASE_URL;

/// Main configuration for the Fixer contract checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixerConfig {
    /// The base URL for the Fixer REST API.
    pub base_url: String,
    /// HTTP timeout in seconds.
    pub http_timeout: u64,
    /// Optional proxy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 30,
            proxy: None,
        }
    }
}

impl FixerConfig {
    /// Creates a new configuration pointed at the given base URL.
    ///
    /// Used by tests to target a local mock server instead of the live
    /// endpoint.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}
