// Validation errors

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// One failed check on one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Key the value was submitted under
    pub field: String,

    pub message: String,

    /// Name of the rule that rejected the value, e.g. `isString`
    pub constraint: String,

    /// JSON type of a mistyped value; user content is never stored here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
        }
    }

    /// Name the rule that failed
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Record the JSON type of the rejected value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every field failure from one form, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failures recorded for `field`
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Collapse into one message per field, keeping the first error seen.
    pub fn into_field_map(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in self.errors {
            map.entry(error.field).or_insert(error.message);
        }
        map
    }

    /// Detailed `{"errors": [...]}` document for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "errors": self.errors })
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

/// Rejected form submissions that never reached field validation
#[derive(Error, Debug)]
pub enum FormInputError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Form data must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_builder() {
        let error = ValidationError::new("name", "Name must be a string")
            .with_constraint("isString")
            .with_value("number");

        assert_eq!(error.constraint, "isString");
        assert_eq!(error.value.as_deref(), Some("number"));
        assert_eq!(error.to_string(), "name: Name must be a string");
    }

    #[test]
    fn test_field_map_keeps_first_message() {
        let errors = ValidationErrors::new(vec![
            ValidationError::new("email", "first"),
            ValidationError::new("email", "second"),
            ValidationError::new("name", "short"),
        ]);
        assert_eq!(errors.get_field_errors("email").len(), 2);

        let map = errors.into_field_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["email"], "first");
        assert_eq!(map["name"], "short");
    }

    #[test]
    fn test_to_json_omits_missing_value() {
        let errors = ValidationErrors::from(vec![
            ValidationError::new("acceptTerms", "nope").with_constraint("accepted"),
            ValidationError::new("name", "bad type").with_value("number"),
        ]);

        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "acceptTerms");
        assert_eq!(json["errors"][0]["constraint"], "accepted");
        assert!(json["errors"][0].get("value").is_none());
        assert_eq!(json["errors"][1]["value"], "number");
    }
}
