//! Email and form validation for InputGuard
//!
//! Validates loosely typed user input and reports failures as data: every
//! check returns a result value with a human-readable message, never a panic.
//!
//! # Examples
//!
//! ## Email Validation
//!
//! ```
//! use inputguard_validation::EmailValidator;
//!
//! let result = EmailValidator::validate("someone@mailinator.com");
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.error.as_deref(),
//!     Some("Please use a permanent email address, not a temporary one")
//! );
//!
//! assert_eq!(EmailValidator::normalize("bad@"), None);
//! ```
//!
//! ## Form Validation
//!
//! ```
//! use inputguard_validation::validate_form;
//! use serde_json::json;
//!
//! let fields = json!({"email": "bad", "name": "J", "acceptTerms": false});
//! let result = validate_form(fields.as_object().unwrap());
//!
//! assert!(!result.is_valid);
//! assert_eq!(result.errors.len(), 3);
//! assert_eq!(result.error("name"), Some("Name must be at least 2 characters"));
//! ```
//!
//! ## Custom Rules
//!
//! ```
//! use inputguard_validation::{FieldRules, FormValidator, IsString, MaxLength};
//! use serde_json::json;
//!
//! let validator = FormValidator::new().field(
//!     FieldRules::for_field("bio")
//!         .labeled("Bio")
//!         .rule(IsString)
//!         .rule(MaxLength(10)),
//! );
//!
//! let fields = json!({"bio": "far too long for this"});
//! let result = validator.validate(fields.as_object().unwrap());
//! assert_eq!(result.error("bio"), Some("Bio is too long (maximum 10 characters)"));
//! ```

mod email;
mod errors;
mod pipe;
mod result;
mod rules;
mod traits;
mod validators;

pub use email::*;
pub use errors::*;
pub use pipe::*;
pub use result::*;
pub use rules::*;
pub use traits::*;
pub use validators::*;
