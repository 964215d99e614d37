// Built-in rules

use crate::{EmailValidator, Rule, ValidationError};
use serde_json::Value;

pub const TERMS_NOT_ACCEPTED: &str = "You must accept the terms and conditions";

/// JSON type name of a value, used in type-mismatch errors
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JavaScript truthiness: `false`, `null`, `0`, `-0`, `NaN` and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length in UTF-16 code units, the unit form limits are stated in
fn char_units(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Requires a string value
pub struct IsString;

impl Rule for IsString {
    fn check(&self, value: &Value, field: &str, label: &str) -> Result<(), ValidationError> {
        if value.is_string() {
            Ok(())
        } else {
            Err(
                ValidationError::new(field, format!("{} must be a string", label))
                    .with_constraint("isString")
                    .with_value(json_type_name(value)),
            )
        }
    }

    fn name(&self) -> &'static str {
        "isString"
    }
}

/// Minimum trimmed string length; non-strings are left to [`IsString`]
pub struct MinLength(pub usize);

impl Rule for MinLength {
    fn check(&self, value: &Value, field: &str, label: &str) -> Result<(), ValidationError> {
        match value.as_str() {
            Some(s) if char_units(s.trim()) < self.0 => Err(ValidationError::new(
                field,
                format!("{} must be at least {} characters", label, self.0),
            )
            .with_constraint("minLength")),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "minLength"
    }
}

/// Maximum trimmed string length; non-strings are left to [`IsString`]
pub struct MaxLength(pub usize);

impl Rule for MaxLength {
    fn check(&self, value: &Value, field: &str, label: &str) -> Result<(), ValidationError> {
        match value.as_str() {
            Some(s) if char_units(s.trim()) > self.0 => Err(ValidationError::new(
                field,
                format!("{} is too long (maximum {} characters)", label, self.0),
            )
            .with_constraint("maxLength")),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "maxLength"
    }
}

/// Runs [`EmailValidator`] and surfaces its message verbatim
pub struct IsEmail;

impl Rule for IsEmail {
    fn check(&self, value: &Value, field: &str, _label: &str) -> Result<(), ValidationError> {
        let Some(email) = value.as_str() else {
            return Ok(());
        };

        match EmailValidator::validate(email).error {
            Some(message) => Err(ValidationError::new(field, message).with_constraint("isEmail")),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "isEmail"
    }
}

/// Requires a truthy value, as for a terms-of-service checkbox
pub struct Accepted;

impl Rule for Accepted {
    fn check(&self, value: &Value, field: &str, _label: &str) -> Result<(), ValidationError> {
        if is_truthy(value) {
            Ok(())
        } else {
            Err(ValidationError::new(field, TERMS_NOT_ACCEPTED).with_constraint("accepted"))
        }
    }

    fn name(&self) -> &'static str {
        "accepted"
    }
}
