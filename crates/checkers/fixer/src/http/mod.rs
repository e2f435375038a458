//! HTTP client implementation for the Fixer contract checker.
//!
//! This module provides the client used to exercise the latest-rates endpoint,
//! including error handling, query parameters, and response models.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::FixerHttpClient;
pub use error::*;
pub use models::*;
pub use query::*;
