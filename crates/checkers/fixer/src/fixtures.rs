//! Shared fixtures for the contract test suites.
//!
//! The access-key error scenarios are table-driven from a YAML file so the
//! expected envelopes live beside the tests rather than inline in assertions.
//! A missing or malformed fixture file is fatal at suite startup, with the
//! offending path in the error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::models::ErrorEnvelope;

/// One row of the error-fixture table: an access key and the exact envelope
/// the service must return for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCase {
    pub access_key: String,
    pub expected: ErrorEnvelope,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Loads the access-key error table from a YAML file.
pub fn load_error_cases(path: impl AsRef<Path>) -> Result<Vec<ErrorCase>, FixtureError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_cases() {
        let yaml = r#"
- access_key: ""
  expected:
    success: false
    error:
      code: 101
      type: missing_access_key
      info: "You have not supplied an API Access Key. [Required format: access_key=YOUR_ACCESS_KEY]"
"#;
        let cases: Vec<ErrorCase> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].access_key, "");
        assert_eq!(cases[0].expected.error.code, 101);
        assert_eq!(cases[0].expected.error.kind, "missing_access_key");
        assert!(!cases[0].expected.success);
    }

    #[test]
    fn test_missing_file_error_includes_path() {
        let result = load_error_cases("/no/such/fixture.yaml");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/no/such/fixture.yaml"));
    }
}
