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

//! The contract checker for the latest-rates endpoint.
//!
//! `ContractChecker` performs the fetch; every assertion is a pure function of
//! one captured [`ApiResponse`] plus literal expectations. A failed assertion
//! produces a [`Violation`] value naming the field and both values, so callers
//! (the test suites, the live runner) decide how to surface it. Independent
//! test cases continue past each other's violations.

pub mod schema;

use std::fmt;

use chrono::Utc;
use thiserror::Error;

use crate::common::parse::{extract_object_field, extract_string_field, extract_u64_field};
use crate::config::FixerConfig;
use crate::http::client::FixerHttpClient;
use crate::http::error::FixerHttpError;
use crate::http::models::{ApiError, ApiResponse};
use crate::http::query::LatestParams;

pub use schema::{FieldKind, ResponseSchema, SchemaViolation};

/// The base currency the service quotes against on the free plan.
pub const DEFAULT_BASE_CURRENCY: &str = "EUR";

/// A single failed contract assertion.
///
/// This is a reportable check failure, never a runtime error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract violation at `{path}`: expected {expected}, actual {actual}")]
pub struct Violation {
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    fn missing(path: impl Into<String>, expected: impl fmt::Display) -> Self {
        Self::new(path, expected, "<missing>")
    }
}

impl From<SchemaViolation> for Violation {
    fn from(violation: SchemaViolation) -> Self {
        match violation {
            SchemaViolation::NotAnObject { actual } => Violation::new("$", "object", actual),
            SchemaViolation::MissingField { path, expected } => Violation::missing(path, expected),
            SchemaViolation::KindMismatch {
                path,
                expected,
                actual,
            } => Violation::new(path, expected, actual),
        }
    }
}

/// Issues requests against one configured endpoint and hands back captured
/// responses for assertion.
pub struct ContractChecker {
    client: FixerHttpClient,
}

impl ContractChecker {
    pub fn new(config: &FixerConfig) -> Result<Self, FixerHttpError> {
        Ok(Self {
            client: FixerHttpClient::new(config)?,
        })
    }

    pub fn from_client(client: FixerHttpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FixerHttpClient {
        &self.client
    }

    /// One GET against `/latest` with the given access key. Transport failures
    /// propagate; they are never retried.
    pub async fn fetch_latest(&self, access_key: &str) -> Result<ApiResponse, FixerHttpError> {
        self.client.latest(&LatestParams::with_key(access_key)).await
    }
}

/// Checks `body.error.{code,type,info}` against the expected literals exactly.
pub fn assert_error_shape(response: &ApiResponse, expected: &ApiError) -> Result<(), Violation> {
    let error = extract_object_field(&response.body, "error")
        .map_err(|_| Violation::missing("error", "error object"))?;

    let code = extract_u64_field(error, "code")
        .map_err(|_| Violation::missing("error.code", expected.code))?;
    if code != u64::from(expected.code) {
        return Err(Violation::new("error.code", expected.code, code));
    }

    let kind = extract_string_field(error, "type")
        .map_err(|_| Violation::missing("error.type", &expected.kind))?;
    if kind != expected.kind {
        return Err(Violation::new("error.type", &expected.kind, &kind));
    }

    let info = extract_string_field(error, "info")
        .map_err(|_| Violation::missing("error.info", &expected.info))?;
    if info != expected.info {
        return Err(Violation::new("error.info", &expected.info, &info));
    }

    Ok(())
}

/// Structurally validates the body against the given schema.
pub fn assert_schema(response: &ApiResponse, schema: &ResponseSchema) -> Result<(), Violation> {
    schema.validate(&response.body).map_err(Violation::from)
}

/// Checks `body.base` equals the expected currency code.
pub fn assert_base_currency(response: &ApiResponse, expected: &str) -> Result<(), Violation> {
    let base = extract_string_field(&response.body, "base")
        .map_err(|_| Violation::missing("base", expected))?;
    if base != expected {
        return Err(Violation::new("base", expected, base));
    }
    Ok(())
}

/// Checks `body.date` equals the current UTC date in `YYYY-MM-DD` form.
pub fn assert_date_is_today(response: &ApiResponse) -> Result<(), Violation> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let date = extract_string_field(&response.body, "date")
        .map_err(|_| Violation::missing("date", &today))?;
    if date != today {
        return Err(Violation::new("date", today, date));
    }
    Ok(())
}

/// Checks the `Content-Type` header begins with `application/json`.
pub fn assert_content_type_json(response: &ApiResponse) -> Result<(), Violation> {
    match response.header("content-type") {
        Some(value) if value.starts_with("application/json") => Ok(()),
        Some(value) => Err(Violation::new(
            "headers.content-type",
            "application/json",
            value,
        )),
        None => Err(Violation::missing("headers.content-type", "application/json")),
    }
}

/// The full battery for a valid-key response. Collects every violation rather
/// than stopping at the first.
pub fn check_latest_contract(response: &ApiResponse) -> Vec<Violation> {
    [
        assert_content_type_json(response),
        assert_schema(response, &ResponseSchema::latest()),
        assert_base_currency(response, DEFAULT_BASE_CURRENCY),
        assert_date_is_today(response),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{json, Value};

    use super::*;

    fn response_with_body(body: Value) -> ApiResponse {
        let mut headers = BTreeMap::new();
        headers.insert(
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        );
        ApiResponse {
            status: 200,
            headers,
            body,
        }
    }

    fn missing_key_error() -> ApiError {
        ApiError {
            code: 101,
            kind: "missing_access_key".to_string(),
            info: "You have not supplied an API Access Key. [Required format: access_key=YOUR_ACCESS_KEY]".to_string(),
        }
    }

    #[test]
    fn test_error_shape_matches() {
        let response = response_with_body(json!({
            "success": false,
            "error": {
                "code": 101,
                "type": "missing_access_key",
                "info": "You have not supplied an API Access Key. [Required format: access_key=YOUR_ACCESS_KEY]"
            }
        }));
        assert_eq!(assert_error_shape(&response, &missing_key_error()), Ok(()));
    }

    #[test]
    fn test_error_shape_mismatch_names_field_and_values() {
        let response = response_with_body(json!({
            "success": false,
            "error": {
                "code": 101,
                "type": "invalid_access_key",
                "info": "irrelevant"
            }
        }));
        let violation = assert_error_shape(&response, &missing_key_error()).unwrap_err();
        assert_eq!(violation.path, "error.type");
        let rendered = violation.to_string();
        assert!(rendered.contains("missing_access_key"));
        assert!(rendered.contains("invalid_access_key"));
    }

    #[test]
    fn test_error_shape_missing_envelope() {
        let response = response_with_body(json!({"success": true}));
        let violation = assert_error_shape(&response, &missing_key_error()).unwrap_err();
        assert_eq!(violation.path, "error");
        assert_eq!(violation.actual, "<missing>");
    }

    #[test]
    fn test_base_currency() {
        let response = response_with_body(json!({"base": "EUR"}));
        assert_eq!(assert_base_currency(&response, "EUR"), Ok(()));

        let response = response_with_body(json!({"base": "USD"}));
        let violation = assert_base_currency(&response, "EUR").unwrap_err();
        assert_eq!(violation.path, "base");
        assert_eq!(violation.expected, "EUR");
        assert_eq!(violation.actual, "USD");
    }

    #[test]
    fn test_date_is_today() {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let response = response_with_body(json!({"date": today}));
        assert_eq!(assert_date_is_today(&response), Ok(()));

        let response = response_with_body(json!({"date": "1999-12-31"}));
        let violation = assert_date_is_today(&response).unwrap_err();
        assert_eq!(violation.path, "date");
        assert_eq!(violation.actual, "1999-12-31");
    }

    #[test]
    fn test_content_type_prefix() {
        let response = response_with_body(json!({}));
        assert_eq!(assert_content_type_json(&response), Ok(()));

        let mut response = response_with_body(json!({}));
        response
            .headers
            .insert("content-type".to_string(), "text/html".to_string());
        let violation = assert_content_type_json(&response).unwrap_err();
        assert_eq!(violation.path, "headers.content-type");
        assert_eq!(violation.actual, "text/html");
    }

    #[test]
    fn test_valid_key_battery_passes() {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let response = response_with_body(json!({
            "success": true,
            "base": "EUR",
            "date": today,
            "rates": {"USD": 1.1}
        }));
        assert!(check_latest_contract(&response).is_empty());
    }

    #[test]
    fn test_valid_key_battery_collects_all_violations() {
        let response = response_with_body(json!({
            "success": true,
            "base": "USD",
            "date": "1999-12-31",
            "rates": {"USD": 1.1}
        }));
        let violations = check_latest_contract(&response);
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["base", "date"]);
    }
}
