//! Fuzz target for JSON form intake.
//!
//! Tests arbitrary request bodies and loosely typed field values.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use inputguard::FormPipe;
use serde_json::{Map, Value, json};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FuzzValue {
    fn into_json(self) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => json!(b),
            FuzzValue::Number(n) => json!(n),
            FuzzValue::Text(s) => json!(s),
            FuzzValue::List(items) => json!(items),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzForm {
    body: Vec<u8>,
    email: Option<FuzzValue>,
    name: Option<FuzzValue>,
    accept_terms: Option<FuzzValue>,
}

fuzz_target!(|data: FuzzForm| {
    // Raw bodies: errors are fine, panics are not
    if let Ok(result) = FormPipe::parse(&data.body) {
        assert_eq!(result.is_valid, result.errors.is_empty());
    }

    let mut fields = Map::new();
    for (key, value) in [
        ("email", data.email),
        ("name", data.name),
        ("acceptTerms", data.accept_terms),
    ] {
        if let Some(value) = value {
            fields.insert(key.to_string(), value.into_json());
        }
    }

    let result = inputguard::validate_form(&fields);
    assert_eq!(result.is_valid, result.errors.is_empty());
    assert!(result.errors.keys().all(|key| fields.contains_key(key)));
});
