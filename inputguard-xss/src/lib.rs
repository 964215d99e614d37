//! # InputGuard XSS Protection
//!
//! Sanitization of untrusted text (form fields, feedback messages, analytics
//! event properties) before it is stored, displayed or forwarded.
//!
//! ## Features
//!
//! - ✅ **Protocol Stripping** - Remove `javascript:`, `data:`, `vbscript:`, `file://`, `about:`
//! - ✅ **Event Handler Stripping** - Remove `on<event>=` attributes and bare catalog event names
//! - ✅ **Bypass Resistant** - Nested tokens like `ononclick=` collapse completely
//! - ✅ **Bounded Work** - Every re-scan loop has an explicit pass limit
//! - ✅ **Entity Encoding** - `&`, `<`, `>`, `"`, `'` with a length cap
//! - ✅ **Idempotent** - Sanitizing sanitized text returns it unchanged
//! - ✅ **Threat Detection** - Locate and classify dangerous constructs
//!
//! ## Quick Start
//!
//! ```rust
//! use inputguard_xss::{sanitize_input, XssEncoder};
//!
//! assert_eq!(sanitize_input("<div>Hello</div>"), "divHello/div");
//! assert_eq!(sanitize_input("test & check"), "test &amp; check");
//!
//! let encoded = XssEncoder::encode_entities("<b>\"hi\"</b>");
//! assert_eq!(encoded, "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
//! ```
//!
//! ## Nested Attack Tokens
//!
//! ```rust
//! use inputguard_xss::sanitize_input;
//!
//! assert_eq!(sanitize_input("ononclick=alert(1)"), "alert(1)");
//! assert_eq!(sanitize_input("jajavascript:vascript:alert(1)"), "alert(1)");
//!
//! // Words that merely start with "on" are kept
//! assert_eq!(sanitize_input("Online onboarding"), "Online onboarding");
//! ```
//!
//! ## Custom Limits
//!
//! ```rust
//! use inputguard_xss::{InputSanitizer, SanitizerConfig};
//!
//! let sanitizer = InputSanitizer::with_config(SanitizerConfig::new().with_max_length(140));
//! let clean = sanitizer.sanitize(&"a".repeat(1_000));
//! assert_eq!(clean.len(), 140);
//! ```
//!
//! ## Threat Detection
//!
//! ```rust
//! use inputguard_xss::{Threat, XssValidator};
//!
//! assert!(XssValidator::contains_xss("<img src=x onerror=alert(1)>"));
//! assert_eq!(
//!     XssValidator::detect_attack_type("img onerror=alert(1)"),
//!     Some(Threat::HandlerAttribute)
//! );
//! assert!(!XssValidator::contains_xss("based on research"));
//! ```

pub mod catalog;
pub mod config;
pub mod encoder;
pub mod error;
pub mod event_handler;
pub mod fixed_point;
pub mod protocol;
pub mod sanitizer;
pub mod validator;

pub use catalog::{EVENT_NAMES, is_event_name, is_handler_attribute};
pub use config::SanitizerConfig;
pub use encoder::{DEFAULT_MAX_LENGTH, XssEncoder, truncate_encoded, utf16_len};
pub use error::{Result, XssError};
pub use event_handler::{EventHandlerStripper, strip_event_handlers};
pub use fixed_point::{FixedPoint, converge};
pub use protocol::{ProtocolStripper, Scheme, strip_protocols};
pub use sanitizer::{InputSanitizer, sanitize_input, sanitize_json};
pub use validator::{Threat, XssValidator};

/// Encode HTML-significant characters, capped at [`DEFAULT_MAX_LENGTH`].
pub fn encode_entities(input: &str) -> String {
    XssEncoder::encode_entities(input)
}
