use crate::config::SanitizerConfig;
use crate::encoder::{XssEncoder, truncate_encoded};
use crate::error::Result;
use crate::event_handler::EventHandlerStripper;
use crate::protocol::ProtocolStripper;
use crate::validator::XssValidator;
use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULT_SANITIZER: Lazy<InputSanitizer> = Lazy::new(InputSanitizer::new);

/// Sanitizer for untrusted form fields and free text.
///
/// The pipeline runs in a fixed order:
///
/// 1. trim surrounding whitespace
/// 2. delete every `<` and `>` (tag names survive as plain text)
/// 3. strip dangerous URI schemes
/// 4. strip inline event handlers
/// 5. entity-encode `&`, `"` and `'`
/// 6. trim again and cap the length
///
/// Steps 3 and 4 are repeated together until a whole round changes nothing,
/// since removing one kind of token can splice together another
/// (`javaonclick=script:`). If anything dangerous is left when the rounds
/// end, including under zero limits, the text is cut at the earliest such
/// construct. The output is therefore free
/// of every dangerous token and a fixed point of [`sanitize`](Self::sanitize).
#[derive(Debug, Clone)]
pub struct InputSanitizer {
    config: SanitizerConfig,
    protocols: ProtocolStripper,
    handlers: EventHandlerStripper,
}

impl InputSanitizer {
    /// Create a sanitizer with default limits
    pub fn new() -> Self {
        Self::with_config(SanitizerConfig::default())
    }

    /// Create a sanitizer with custom limits
    pub fn with_config(config: SanitizerConfig) -> Self {
        Self {
            protocols: ProtocolStripper::new().with_max_passes(config.max_passes),
            handlers: EventHandlerStripper::new().with_max_passes(config.max_passes),
            config,
        }
    }

    /// Get the active configuration
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitize a single untrusted string.
    pub fn sanitize(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let unbracketed: String = trimmed.chars().filter(|c| !matches!(c, '<' | '>')).collect();
        let stripped = self.strip_dangerous(&unbracketed);
        let encoded = XssEncoder::encode_text(&stripped);
        let capped = truncate_encoded(encoded.trim(), self.config.max_length).trim_end();

        if capped != input {
            tracing::debug!(
                input_bytes = input.len(),
                output_bytes = capped.len(),
                "sanitized input"
            );
        }

        capped.to_string()
    }

    /// Run protocol and handler stripping to a joint fixed point.
    ///
    /// Whatever the limits, the result is cut at any construct still present.
    fn strip_dangerous(&self, input: &str) -> String {
        let mut value = input.to_string();

        for _ in 0..self.config.max_rounds {
            let next = self.handlers.strip(&self.protocols.strip(&value));
            if next == value {
                break;
            }
            value = next;
        }

        // a zero pass limit makes a round a no-op, so settling proves nothing
        match XssValidator::first_threat_offset(&value) {
            Some(offset) => {
                tracing::warn!(
                    max_rounds = self.config.max_rounds,
                    max_passes = self.config.max_passes,
                    dropped_bytes = value.len() - offset,
                    "threat left after stripping, truncating at its offset"
                );
                value.truncate(offset);
                value
            }
            None => value,
        }
    }

    /// Sanitize every string inside a JSON value in place.
    ///
    /// Object keys, numbers, booleans and nulls are left untouched.
    pub fn sanitize_json(&self, value: &mut Value) {
        match value {
            Value::String(s) => *s = self.sanitize(s),
            Value::Array(items) => {
                for item in items.iter_mut() {
                    self.sanitize_json(item);
                }
            }
            Value::Object(fields) => {
                for (_key, field) in fields.iter_mut() {
                    self.sanitize_json(field);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    /// Parse a JSON document, sanitize its strings and serialize it again.
    pub fn sanitize_json_str(&self, json: &str) -> Result<String> {
        let mut value: Value = serde_json::from_str(json)?;
        self.sanitize_json(&mut value);
        Ok(serde_json::to_string(&value)?)
    }
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitize `input` with the shared default sanitizer.
pub fn sanitize_input(input: &str) -> String {
    DEFAULT_SANITIZER.sanitize(input)
}

/// Sanitize every string in `value` with the shared default sanitizer.
pub fn sanitize_json(value: &mut Value) {
    DEFAULT_SANITIZER.sanitize_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_angle_brackets_are_deleted() {
        assert_eq!(sanitize_input("<div>Hello</div>"), "divHello/div");
        assert_eq!(
            sanitize_input("<script>alert('XSS')</script>"),
            "scriptalert(&#x27;XSS&#x27;)/script"
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("   \n\t "), "");
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize_input("  hello  "), "hello");
        assert_eq!(sanitize_input("javascript: hello "), "hello");
    }

    #[test]
    fn test_entity_encoding() {
        assert_eq!(sanitize_input("test & check"), "test &amp; check");
        assert_eq!(sanitize_input("it's"), "it&#x27;s");
        assert_eq!(sanitize_input(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_nested_bypass() {
        assert_eq!(sanitize_input("ononclick=alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("onononclick=alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("jajavascript:vascript:alert(1)"), "alert(1)");
    }

    #[test]
    fn test_cross_pass_recombination() {
        // removing data: splices a javascript: together
        assert_eq!(sanitize_input("javasdata:cript:alert(1)"), "alert(1)");
        // removing the handler splices a javascript: together
        assert_eq!(sanitize_input("javaonclick=script:alert(1)"), "alert(1)");
        // removing the inner event name splices another together
        assert_eq!(sanitize_input("ononclickclick"), "");
        // removing brackets splices a handler together
        assert_eq!(sanitize_input("on<b>click=alert(1)"), "alert(1)");
    }

    #[test]
    fn test_legitimate_words() {
        assert_eq!(sanitize_input("onboard"), "onboard");
        assert_eq!(sanitize_input("Online"), "Online");
        assert_eq!(sanitize_input("based on research"), "based on research");
    }

    #[test]
    fn test_length_cap() {
        let output = sanitize_input(&"x".repeat(2_000));
        assert_eq!(output.len(), 500);

        let output = sanitize_input(&"&".repeat(200));
        assert_eq!(output, "&amp;".repeat(100));
    }

    #[test]
    fn test_cap_does_not_leave_trailing_space() {
        let input = format!("{} tail", "a".repeat(499));
        assert_eq!(sanitize_input(&input), "a".repeat(499));
    }

    #[test]
    fn test_idempotent_on_encoded_output() {
        for input in ["test & check", "it's", r#"<a href="x">"#, "a &amp; b"] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "{input}");
        }
    }

    #[test]
    fn test_round_limit_falls_back_to_truncation() {
        let sanitizer = InputSanitizer::with_config(
            SanitizerConfig::new().with_max_passes(1).with_max_rounds(1),
        );

        assert_eq!(sanitizer.sanitize("jajavascript:vascript:alert(1)"), "");
        assert_eq!(
            sanitizer.sanitize("keep this jajavascript:vascript:alert(1)"),
            "keep this"
        );
    }

    #[test]
    fn test_zero_limits_still_remove_threats() {
        let no_passes =
            InputSanitizer::with_config(SanitizerConfig::new().with_max_passes(0));
        let output = no_passes.sanitize("javascript:alert(1) onfoo=x");
        assert_eq!(output, "");
        assert!(!XssValidator::contains_xss(&output));
        assert_eq!(no_passes.sanitize("keep javascript:alert(1)"), "keep");

        let no_rounds =
            InputSanitizer::with_config(SanitizerConfig::new().with_max_rounds(0));
        assert_eq!(no_rounds.sanitize("safe onclick=x"), "safe");
        assert_eq!(no_rounds.sanitize("plain & simple"), "plain &amp; simple");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn debug_log_of(input: &str) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || sanitize_input(input));
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_same_length_rewrite_is_logged() {
        // five bytes in, five bytes out
        assert_eq!(sanitize_input("on1=&"), "&amp;");
        assert!(debug_log_of("on1=&").contains("sanitized input"));
        assert!(!debug_log_of("unchanged").contains("sanitized input"));
    }

    #[test]
    fn test_deep_nesting_within_limits() {
        let depth = 150;
        let input = format!(
            "{}javascript:{}alert(1)",
            "ja".repeat(depth),
            "vascript:".repeat(depth)
        );
        assert_eq!(sanitize_input(&input), "alert(1)");
    }

    #[test]
    fn test_custom_max_length() {
        let sanitizer = InputSanitizer::with_config(SanitizerConfig::new().with_max_length(5));
        assert_eq!(sanitizer.sanitize("hello world"), "hello");
        assert_eq!(sanitizer.config().max_length, 5);
    }

    #[test]
    fn test_sanitize_json() {
        let mut payload = json!({
            "event": "signup<script>",
            "props": {
                "source": "javascript:alert(1)",
                "tags": ["a & b", 3, true, null],
            },
            "count": 2,
        });
        sanitize_json(&mut payload);

        assert_eq!(
            payload,
            json!({
                "event": "signupscript",
                "props": {
                    "source": "alert(1)",
                    "tags": ["a &amp; b", 3, true, null],
                },
                "count": 2,
            })
        );
    }

    #[test]
    fn test_sanitize_json_str() {
        let sanitizer = InputSanitizer::new();
        let out = sanitizer.sanitize_json_str(r#"{"msg":"onload=x"}"#).unwrap();
        assert_eq!(out, r#"{"msg":"x"}"#);

        assert!(sanitizer.sanitize_json_str("not json").is_err());
    }
}
