// Validation traits

use crate::ValidationError;
use serde_json::Value;

/// A single check applied to one loosely typed form value.
///
/// `field` is the key the value was submitted under and becomes
/// [`ValidationError::field`]; `label` is the human name used in messages.
pub trait Rule: Send + Sync {
    /// Check a value
    fn check(&self, value: &Value, field: &str, label: &str) -> Result<(), ValidationError>;

    /// Get rule name
    fn name(&self) -> &'static str;
}
