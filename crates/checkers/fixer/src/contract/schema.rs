//! Structural validation of the latest-rates response body.
//!
//! Validation is structural only: required top-level fields must be present
//! with the expected JSON kind. Field values are never compared here.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Expected JSON kind for a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    String,
    Number,
    Object,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Bool => value.is_boolean(),
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Object => value.is_object(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "boolean",
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// Names the JSON kind of an arbitrary value for violation messages.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("response body is not an object (got {actual})")]
    NotAnObject { actual: &'static str },

    #[error("missing required field `{path}` ({expected})")]
    MissingField { path: String, expected: FieldKind },

    #[error("field `{path}` expected {expected}, got {actual}")]
    KindMismatch {
        path: String,
        expected: FieldKind,
        actual: &'static str,
    },
}

/// Required top-level fields and their kinds.
#[derive(Debug, Clone, Default)]
pub struct ResponseSchema {
    required: Vec<(String, FieldKind)>,
}

impl ResponseSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.required.push((name.into(), kind));
        self
    }

    /// The documented shape of a successful latest-rates body.
    pub fn latest() -> Self {
        Self::new()
            .require("success", FieldKind::Bool)
            .require("base", FieldKind::String)
            .require("date", FieldKind::String)
            .require("rates", FieldKind::Object)
    }

    /// Validates the body, reporting the first violating path.
    pub fn validate(&self, body: &Value) -> Result<(), SchemaViolation> {
        let object = body.as_object().ok_or(SchemaViolation::NotAnObject {
            actual: kind_name(body),
        })?;

        for (name, kind) in &self.required {
            match object.get(name) {
                None => {
                    return Err(SchemaViolation::MissingField {
                        path: name.clone(),
                        expected: *kind,
                    });
                }
                Some(value) if !kind.matches(value) => {
                    return Err(SchemaViolation::KindMismatch {
                        path: name.clone(),
                        expected: *kind,
                        actual: kind_name(value),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_valid_latest_body() {
        let body = json!({
            "success": true,
            "timestamp": 1717171717,
            "base": "EUR",
            "date": "2024-05-31",
            "rates": {"USD": 1.08}
        });
        assert_eq!(ResponseSchema::latest().validate(&body), Ok(()));
    }

    #[test]
    fn test_missing_field_names_path() {
        let body = json!({
            "success": true,
            "base": "EUR",
            "rates": {}
        });
        let violation = ResponseSchema::latest().validate(&body).unwrap_err();
        assert_eq!(
            violation,
            SchemaViolation::MissingField {
                path: "date".to_string(),
                expected: FieldKind::String,
            }
        );
    }

    #[test]
    fn test_kind_mismatch_names_both_kinds() {
        let body = json!({
            "success": true,
            "base": "EUR",
            "date": "2024-05-31",
            "rates": [1.08]
        });
        let violation = ResponseSchema::latest().validate(&body).unwrap_err();
        assert_eq!(
            violation,
            SchemaViolation::KindMismatch {
                path: "rates".to_string(),
                expected: FieldKind::Object,
                actual: "array",
            }
        );
        assert!(violation.to_string().contains("expected object, got array"));
    }

    #[test]
    fn test_non_object_body() {
        let violation = ResponseSchema::latest().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(violation, SchemaViolation::NotAnObject { actual: "array" });
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let body = json!({
            "success": true,
            "base": "EUR",
            "date": "2024-05-31",
            "rates": {},
            "timestamp": 1,
            "historical": false
        });
        assert_eq!(ResponseSchema::latest().validate(&body), Ok(()));
    }
}
