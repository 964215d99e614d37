// InputGuard - sanitization and validation for untrusted form input
//
// This library cleans free text before it is stored or forwarded, and validates
// email addresses and signup forms, reporting failures as data.

// Re-export member crates
pub use inputguard_validation;
pub use inputguard_xss;

pub use inputguard_validation::{
    EmailValidator, FieldRules, FormInputError, FormPipe, FormResult, FormValidator, Rule,
    ValidationError, ValidationErrors, ValidationResult,
};
pub use inputguard_xss::{
    InputSanitizer, SanitizerConfig, Threat, XssEncoder, XssError, XssValidator,
};

use serde_json::{Map, Value};

/// Sanitize untrusted free text.
///
/// ```
/// assert_eq!(inputguard::sanitize("<b>hi</b> & bye"), "bhi/b &amp; bye");
/// assert_eq!(inputguard::sanitize("ononclick=alert(1)"), "alert(1)");
/// ```
pub fn sanitize(input: &str) -> String {
    inputguard_xss::sanitize_input(input)
}

/// Encode `&`, `<`, `>`, `"` and `'` as HTML entities, capped at 500 code units.
pub fn encode_entities(input: &str) -> String {
    inputguard_xss::encode_entities(input)
}

/// Sanitize every string inside a JSON value in place
pub fn sanitize_json(value: &mut Value) {
    inputguard_xss::sanitize_json(value)
}

/// Validate an email address
pub fn validate_email(input: &str) -> ValidationResult {
    EmailValidator::validate(input)
}

/// Trimmed, lowercased email, or `None` if it does not validate
pub fn normalize_email(input: &str) -> Option<String> {
    EmailValidator::normalize(input)
}

/// Suggest a fix for a mistyped email provider domain.
///
/// ```
/// assert_eq!(
///     inputguard::suggest_email_correction("test.user+tag@gmial.com").as_deref(),
///     Some("test.user+tag@gmail.com")
/// );
/// ```
pub fn suggest_email_correction(input: &str) -> Option<String> {
    EmailValidator::suggest_correction(input)
}

/// Validate a signup form (`email`, `name`, `acceptTerms`); absent keys are skipped
pub fn validate_form(fields: &Map<String, Value>) -> FormResult {
    inputguard_validation::validate_form(fields)
}

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        EmailValidator, FormResult, FormValidator, InputSanitizer, SanitizerConfig,
        ValidationResult, XssValidator, encode_entities, normalize_email, sanitize,
        sanitize_json, suggest_email_correction, validate_email, validate_form,
    };
}
