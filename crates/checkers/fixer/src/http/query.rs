//! Structs for HTTP query parameters in the Fixer contract checker.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct LatestParams {
    pub access_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
}

impl Default for LatestParams {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            base: None,
            symbols: None,
        }
    }
}

impl LatestParams {
    /// Parameters carrying only the access key, the shape every contract
    /// scenario uses.
    pub fn with_key(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Self::default()
        }
    }
}
