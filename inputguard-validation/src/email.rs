// Email validation

use crate::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Longest address accepted, in characters
pub const MAX_EMAIL_LENGTH: usize = 254;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const EMAIL_TOO_LONG: &str = "Email address is too long";
pub const EMAIL_DISPOSABLE: &str = "Please use a permanent email address, not a temporary one";

// Alphanumeric runs joined by single separators, TLD of two or more letters
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+(?:[._+-][a-zA-Z0-9]+)*@[a-zA-Z0-9]+(?:[.-][a-zA-Z0-9]+)*\.[a-zA-Z]{2,}$")
        .unwrap()
});

static DISPOSABLE_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tempmail.com",
        "guerrillamail.com",
        "mailinator.com",
        "10minutemail.com",
        "throwaway.email",
        "temp-mail.org",
        "fakeinbox.com",
        "yopmail.com",
    ]
    .into_iter()
    .collect()
});

static DOMAIN_TYPOS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("gmial.com", "gmail.com"),
        ("gmai.com", "gmail.com"),
        ("gnail.com", "gmail.com"),
        ("yahooo.com", "yahoo.com"),
        ("yaho.com", "yahoo.com"),
        ("hotmial.com", "hotmail.com"),
        ("outlok.com", "outlook.com"),
        ("outloook.com", "outlook.com"),
    ])
});

/// Validates, normalizes and corrects email addresses.
///
/// ```
/// use inputguard_validation::EmailValidator;
///
/// assert!(EmailValidator::validate("user@example.com").is_valid);
/// assert_eq!(
///     EmailValidator::normalize("  User@Example.COM "),
///     Some("user@example.com".to_string())
/// );
/// assert_eq!(
///     EmailValidator::suggest_correction("jane@gmial.com"),
///     Some("jane@gmail.com".to_string())
/// );
/// ```
pub struct EmailValidator;

impl EmailValidator {
    /// Validate an address. Checks run in order and the first failure wins:
    /// presence, structure, length, disposable domain.
    pub fn validate(email: &str) -> ValidationResult {
        let email = email.trim();

        if email.is_empty() {
            return ValidationResult::invalid(EMAIL_REQUIRED);
        }
        if !EMAIL_REGEX.is_match(email) {
            return ValidationResult::invalid(EMAIL_INVALID);
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return ValidationResult::invalid(EMAIL_TOO_LONG);
        }
        if Self::domain_of(email).is_some_and(Self::is_disposable) {
            return ValidationResult::invalid(EMAIL_DISPOSABLE);
        }

        ValidationResult::valid()
    }

    /// Trimmed, lowercased address, or `None` when it does not validate.
    pub fn normalize(email: &str) -> Option<String> {
        Self::validate(email)
            .is_valid
            .then(|| email.trim().to_lowercase())
    }

    /// Suggest a fix for a commonly mistyped provider domain.
    ///
    /// The local part is kept exactly as written, `+tags` included.
    pub fn suggest_correction(email: &str) -> Option<String> {
        let (local, domain) = email.trim().rsplit_once('@')?;
        if domain.is_empty() {
            return None;
        }

        DOMAIN_TYPOS
            .get(domain.to_ascii_lowercase().as_str())
            .map(|fixed| format!("{}@{}", local, fixed))
    }

    /// Domain part after the last `@`, if any
    pub fn domain_of(email: &str) -> Option<&str> {
        email
            .trim()
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
    }

    /// Whether the domain hands out throwaway inboxes
    pub fn is_disposable(domain: &str) -> bool {
        DISPOSABLE_DOMAINS.contains(domain.to_ascii_lowercase().as_str())
    }
}
