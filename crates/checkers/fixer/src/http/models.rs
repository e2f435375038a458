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

//! Data models for Fixer latest-rates API responses.
//!
//! The API returns responses in the format:
//! - Success: `{"success": true, "base": "EUR", "date": "YYYY-MM-DD", "rates": {...}}`
//! - Error: `{"success": false, "error": {"code": ..., "type": ..., "info": ...}}`
//!
//! Both shapes are decoded into typed structs immediately after
//! deserialization; the raw body is additionally captured as a
//! `serde_json::Value` so the contract assertions can inspect exactly what
//! arrived on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A captured response from the latest-rates endpoint.
///
/// Ephemeral: produced per call, discarded after assertions. Header names are
/// stored lowercased.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl ApiResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Decodes the captured body into the typed success/error envelope.
    pub fn decode(&self) -> Result<FixerResponse, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Successful latest-rates payload.
///
/// Volatile numeric rate values are carried but never asserted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRates {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub base: String,
    pub date: String,
    pub rates: BTreeMap<String, f64>,
}

/// Error detail returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

/// Full error envelope as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ApiError,
}

/// Standard Fixer API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixerResponse {
    Success(LatestRates),
    Error(ErrorEnvelope),
}

impl FixerResponse {
    pub fn into_result(self) -> Result<LatestRates, ApiError> {
        match self {
            FixerResponse::Success(rates) => Ok(rates),
            FixerResponse::Error(envelope) => Err(envelope.error),
        }
    }
}
