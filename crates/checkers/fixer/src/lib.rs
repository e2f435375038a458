#![doc = include_str!("../README.md")]

pub mod common;
pub mod config;
pub mod contract;
pub mod error;
pub mod fixtures;
pub mod http;

pub use common::*;
pub use config::FixerConfig;
pub use contract::*;
pub use error::*;
pub use http::*;
