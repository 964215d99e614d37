//! Integration tests for inputguard-validation

use inputguard_validation::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn object(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_email_capture_flow() {
    let raw = "  Ada.Lovelace+news@Example.org ";
    assert!(EmailValidator::validate(raw).is_valid);
    assert_eq!(
        EmailValidator::normalize(raw).as_deref(),
        Some("ada.lovelace+news@example.org")
    );
    assert_eq!(EmailValidator::suggest_correction(raw), None);
}

#[test]
fn test_typo_suggestion_preserves_local_part() {
    assert_eq!(
        EmailValidator::suggest_correction("test.user+tag@gmial.com").as_deref(),
        Some("test.user+tag@gmail.com")
    );
    assert_eq!(
        EmailValidator::suggest_correction("x@hotmial.com").as_deref(),
        Some("x@hotmail.com")
    );
    assert_eq!(
        EmailValidator::suggest_correction("x@yaho.com").as_deref(),
        Some("x@yahoo.com")
    );
}

#[test]
fn test_form_aggregation() {
    let result = validate_form(&object(json!({
        "email": "bad",
        "name": "J",
        "acceptTerms": false,
    })));

    let keys: Vec<&str> = result.errors.keys().map(String::as_str).collect();
    assert_eq!(keys, ["acceptTerms", "email", "name"]);
    assert!(!result.is_valid);
}

#[test]
fn test_valid_signup() {
    let result = validate_form(&object(json!({
        "email": "ada@example.com",
        "name": "Ada",
        "acceptTerms": true,
    })));

    assert_eq!(result, FormResult::from_errors(Default::default()));
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({"isValid": true, "errors": {}}));
}

#[test]
fn test_email_errors_surface_verbatim_in_forms() {
    for (email, expected) in [
        ("", "Email is required"),
        ("nope", "Please enter a valid email address"),
        ("x@guerrillamail.com", "Please use a permanent email address, not a temporary one"),
    ] {
        let result = validate_form(&object(json!({ "email": email })));
        assert_eq!(result.error("email"), Some(expected));
        assert_eq!(EmailValidator::validate(email).error.as_deref(), Some(expected));
    }
}

#[test]
fn test_request_body_intake() {
    let body = serde_json::to_vec(&json!({"name": 12, "acceptTerms": 1})).unwrap();
    let result = FormPipe::parse(&body).unwrap();

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.error("name"), Some("Name must be a string"));
    assert!(FormPipe::parse(b"null").is_err());
}

#[test]
fn test_rejected_body_error_response() {
    let errors = FormPipe::check(&FormValidator::standard(), br#"{"name":false}"#)
        .unwrap()
        .unwrap_err();

    let json: Value = serde_json::from_slice(&FormPipe::error_body(&errors)).unwrap();
    assert_eq!(json["errors"][0]["field"], "name");
    assert_eq!(json["errors"][0]["constraint"], "isString");
    assert_eq!(json["errors"][0]["value"], "boolean");
}

#[test]
fn test_rules_are_shared_across_threads() {
    let validator = std::sync::Arc::new(FormValidator::standard());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let name = "x".repeat(i);
                validator.validate(&object(json!({ "name": name }))).is_valid
            })
        })
        .collect();

    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, [false, false, true, true]);
}

proptest! {
    #[test]
    fn prop_normalize_round_trip(
        local in "[a-zA-Z0-9]{1,10}([._+-][a-zA-Z0-9]{1,5}){0,2}",
        domain in "[a-zA-Z0-9]{1,10}\\.[a-zA-Z]{2,4}",
        pad in "[ \t]{0,2}",
    ) {
        let email = format!("{pad}{local}@{domain}{pad}");
        let result = EmailValidator::validate(&email);

        if result.is_valid {
            prop_assert_eq!(
                EmailValidator::normalize(&email),
                Some(email.trim().to_lowercase())
            );
        } else {
            prop_assert_eq!(EmailValidator::normalize(&email), None);
        }
    }

    #[test]
    fn prop_invalid_never_normalizes(email in ".{0,40}") {
        if !EmailValidator::validate(&email).is_valid {
            prop_assert_eq!(EmailValidator::normalize(&email), None);
        }
    }

    #[test]
    fn prop_form_validity_matches_errors(
        name in proptest::option::of(".{0,120}"),
        accept in proptest::option::of(any::<bool>()),
    ) {
        let mut fields = serde_json::Map::new();
        if let Some(name) = name {
            fields.insert("name".into(), json!(name));
        }
        if let Some(accept) = accept {
            fields.insert("acceptTerms".into(), json!(accept));
        }

        let result = validate_form(&fields);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
        prop_assert!(result.errors.len() <= fields.len());
    }
}
