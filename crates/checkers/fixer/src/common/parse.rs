//! Parsing utilities for Fixer API payloads.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub fn parse_json_response(data: &str) -> Result<Value, ParseError> {
    serde_json::from_str(data).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

pub fn extract_string_field(obj: &Value, field: &str) -> Result<String, ParseError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}

pub fn extract_u64_field(obj: &Value, field: &str) -> Result<u64, ParseError> {
    obj.get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}

pub fn extract_object_field<'a>(obj: &'a Value, field: &str) -> Result<&'a Value, ParseError> {
    obj.get(field)
        .filter(|v| v.is_object())
        .ok_or_else(|| ParseError::MissingField(field.to_string()))
}
