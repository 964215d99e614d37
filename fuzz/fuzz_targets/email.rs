//! Fuzz target for email validation.
//!
//! Normalization only ever returns the trimmed, lowercased form of a valid
//! address, and corrections keep the local part.

#![no_main]

use libfuzzer_sys::fuzz_target;

use inputguard::{normalize_email, suggest_email_correction, validate_email};

fuzz_target!(|email: &str| {
    let result = validate_email(email);
    assert_eq!(result.is_valid, result.error.is_none());

    match normalize_email(email) {
        Some(normalized) => {
            assert!(result.is_valid);
            assert_eq!(normalized, email.trim().to_lowercase());
        }
        None => assert!(!result.is_valid),
    }

    if let Some(fixed) = suggest_email_correction(email) {
        let (local, _) = email.trim().rsplit_once('@').unwrap();
        assert!(fixed.starts_with(&format!("{local}@")));
    }
});
