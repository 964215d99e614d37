// Field rule chains and form validation

use crate::{
    Accepted, FormResult, IsEmail, IsString, MaxLength, MinLength, Rule, ValidationError,
    ValidationErrors,
};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::sync::Arc;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;

static STANDARD_FORM: Lazy<FormValidator> = Lazy::new(FormValidator::standard);

/// Ordered rules for one field. The first failing rule wins.
#[derive(Clone)]
pub struct FieldRules {
    rules: Vec<Arc<dyn Rule>>,
    field: String,
    label: String,
}

impl FieldRules {
    /// Create new rules for a field, labeled with the field name
    pub fn for_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            rules: Vec::new(),
            label: field.clone(),
            field,
        }
    }

    /// Name used for the field in messages
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Append a rule
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Field this chain applies to
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Check a value against the chain
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(value, &self.field, &self.label))
    }
}

impl std::fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("label", &self.label)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Validates a loosely typed form, one rule chain per field.
///
/// Validation is sparse: a field with rules but no submitted value is not an
/// error, and submitted keys without rules are ignored. Every field is
/// checked, so several invalid fields each report their own error.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: Vec<FieldRules>,
}

impl FormValidator {
    /// Create an empty form validator
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add rules for a field
    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// The signup form: `email`, `name` and `acceptTerms`.
    pub fn standard() -> Self {
        Self::new()
            .field(
                FieldRules::for_field("email")
                    .labeled("Email")
                    .rule(IsString)
                    .rule(IsEmail),
            )
            .field(
                FieldRules::for_field("name")
                    .labeled("Name")
                    .rule(IsString)
                    .rule(MinLength(NAME_MIN_LENGTH))
                    .rule(MaxLength(NAME_MAX_LENGTH)),
            )
            .field(FieldRules::for_field("acceptTerms").rule(Accepted))
    }

    /// Validate and collect every field error
    pub fn validate_all(&self, data: &Map<String, Value>) -> Result<(), ValidationErrors> {
        let errors: Vec<ValidationError> = self
            .fields
            .iter()
            .filter_map(|rules| {
                data.get(rules.field())
                    .and_then(|value| rules.validate(value).err())
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Validate into a `{isValid, errors}` result
    pub fn validate(&self, data: &Map<String, Value>) -> FormResult {
        let errors = match self.validate_all(data) {
            Ok(()) => Default::default(),
            Err(errors) => errors.into_field_map(),
        };

        tracing::debug!(
            submitted = data.len(),
            failed = errors.len(),
            "validated form"
        );

        FormResult::from_errors(errors)
    }
}

/// Validate a form with the standard signup rules
pub fn validate_form(data: &Map<String, Value>) -> FormResult {
    STANDARD_FORM.validate(data)
}
