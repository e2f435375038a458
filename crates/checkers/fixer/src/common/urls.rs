//! URL management for Fixer API endpoints.

use std::fmt;

/// Base URL of the public Fixer data API.
pub const DEFAULT_BASE_URL: &str = "http://data.fixer.io/api";

#[derive(Debug, Clone)]
pub struct FixerUrl {
    base_url: String,
}

impl FixerUrl {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url)
    }
}

impl Default for FixerUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl fmt::Display for FixerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url)
    }
}
