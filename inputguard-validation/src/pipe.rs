// JSON form intake

use crate::{
    FormInputError, FormResult, FormValidator, ValidationErrors, json_type_name, validate_form,
};
use serde_json::{Map, Value};

/// Parses a submitted request body and validates it as a form
pub struct FormPipe;

impl FormPipe {
    /// Parse a JSON object body into a field map
    pub fn fields(body: &[u8]) -> Result<Map<String, Value>, FormInputError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(fields),
            other => Err(FormInputError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Parse and validate with the standard signup rules
    pub fn parse(body: &[u8]) -> Result<FormResult, FormInputError> {
        Ok(validate_form(&Self::fields(body)?))
    }

    /// Parse and validate with custom rules
    pub fn parse_with(validator: &FormValidator, body: &[u8]) -> Result<FormResult, FormInputError> {
        Ok(validator.validate(&Self::fields(body)?))
    }

    /// Parse and validate, keeping every failure for an error response
    pub fn check(
        validator: &FormValidator,
        body: &[u8],
    ) -> Result<Result<Map<String, Value>, ValidationErrors>, FormInputError> {
        let fields = Self::fields(body)?;
        Ok(validator.validate_all(&fields).map(|()| fields))
    }

    /// JSON response body describing each failed field
    pub fn error_body(errors: &ValidationErrors) -> Vec<u8> {
        errors.to_json().to_string().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldRules, MinLength};

    #[test]
    fn test_parse_valid_body() {
        let body = br#"{"email":"ada@example.com","name":"Ada","acceptTerms":true}"#;
        let result = FormPipe::parse(body).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn test_parse_reports_field_errors() {
        let result = FormPipe::parse(br#"{"email":"","acceptTerms":""}"#).unwrap();
        assert_eq!(result.error("email"), Some("Email is required"));
        assert!(result.error("acceptTerms").is_some());
    }

    #[test]
    fn test_malformed_json() {
        let err = FormPipe::parse(b"{not json").unwrap_err();
        assert!(matches!(err, FormInputError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_non_object_body() {
        let err = FormPipe::parse(b"[1, 2]").unwrap_err();
        assert!(matches!(err, FormInputError::NotAnObject("array")));

        let err = FormPipe::parse(b"\"text\"").unwrap_err();
        assert_eq!(err.to_string(), "Form data must be a JSON object, got string");
    }

    #[test]
    fn test_parse_with_custom_rules() {
        let validator =
            FormValidator::new().field(FieldRules::for_field("city").labeled("City").rule(MinLength(3)));

        let result = FormPipe::parse_with(&validator, br#"{"city":"LA"}"#).unwrap();
        assert_eq!(result.error("city"), Some("City must be at least 3 characters"));
    }

    #[test]
    fn test_check_and_error_body() {
        let validator = FormValidator::standard();

        let fields = FormPipe::check(&validator, br#"{"name":"Ada"}"#).unwrap().unwrap();
        assert_eq!(fields["name"], "Ada");

        let errors = FormPipe::check(&validator, br#"{"name":7,"acceptTerms":null}"#)
            .unwrap()
            .unwrap_err();
        let body: Value = serde_json::from_slice(&FormPipe::error_body(&errors)).unwrap();
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["value"], "number");
        assert_eq!(body["errors"][1]["constraint"], "accepted");

        assert!(FormPipe::check(&validator, b"[]").is_err());
    }
}
