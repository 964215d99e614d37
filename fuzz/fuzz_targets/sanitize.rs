//! Fuzz target for the sanitize pipeline.
//!
//! Checks idempotence, the output bound and that no dangerous token survives.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use inputguard::{InputSanitizer, SanitizerConfig, XssValidator};

/// Arbitrary input plus small limits, zero included, so the truncation cut is reached.
#[derive(Debug, Arbitrary)]
struct FuzzSanitize {
    text: String,
    max_passes: u8,
    max_rounds: u8,
}

fn check(sanitizer: &InputSanitizer, text: &str) {
    let once = sanitizer.sanitize(text);

    assert!(once.encode_utf16().count() <= sanitizer.config().max_length);
    assert!(!once.contains('<') && !once.contains('>'));
    assert!(!XssValidator::contains_xss(&once), "{once:?}");
    assert_eq!(sanitizer.sanitize(&once), once);
}

fuzz_target!(|data: FuzzSanitize| {
    check(&InputSanitizer::new(), &data.text);

    let config = SanitizerConfig::new()
        .with_max_passes(usize::from(data.max_passes % 8))
        .with_max_rounds(usize::from(data.max_rounds % 4));
    check(&InputSanitizer::with_config(config), &data.text);

    let encoded = inputguard::encode_entities(&data.text);
    assert!(encoded.encode_utf16().count() <= 500);
});
