use crate::catalog::EVENT_TOKEN;
use crate::error::{Result, XssError};
use crate::event_handler::HANDLER_ATTRIBUTE;
use crate::protocol::Scheme;

/// Kind of dangerous construct found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threat {
    /// A literal `<` or `>`
    Markup,
    /// A dangerous URI scheme
    Protocol(Scheme),
    /// An `on<word>=` attribute
    HandlerAttribute,
    /// A bare `on<event>` token from the event catalog
    EventName,
}

impl Threat {
    /// Human-readable attack category
    pub fn describe(&self) -> &'static str {
        match self {
            Threat::Markup => "Markup injection",
            Threat::Protocol(Scheme::JavaScript) => "JavaScript protocol",
            Threat::Protocol(Scheme::Data) => "Data URL injection",
            Threat::Protocol(Scheme::VbScript) => "VBScript injection",
            Threat::Protocol(Scheme::File) => "File URL injection",
            Threat::Protocol(Scheme::About) => "About URL injection",
            Threat::HandlerAttribute => "Event handler injection",
            Threat::EventName => "Event handler name",
        }
    }
}

impl std::fmt::Display for Threat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Detects constructs the sanitizer is meant to remove
pub struct XssValidator;

impl XssValidator {
    /// Check if text contains any dangerous construct
    pub fn contains_xss(text: &str) -> bool {
        Self::first_threat(text).is_some()
    }

    /// Validate text and return error if a dangerous construct is present
    pub fn validate(text: &str) -> Result<()> {
        match Self::detect_attack_type(text) {
            Some(threat) => Err(XssError::MaliciousContent(threat.to_string())),
            None => Ok(()),
        }
    }

    /// Detect the earliest dangerous construct in `text`.
    pub fn detect_attack_type(text: &str) -> Option<Threat> {
        Self::first_threat(text).map(|(_, threat)| threat)
    }

    /// Byte offset where the earliest dangerous construct begins.
    ///
    /// Every prefix of `text` that ends at or before this offset is free of
    /// all constructs this validator knows about.
    pub fn first_threat_offset(text: &str) -> Option<usize> {
        Self::first_threat(text).map(|(offset, _)| offset)
    }

    fn first_threat(text: &str) -> Option<(usize, Threat)> {
        let markup = text
            .find(['<', '>'])
            .map(|offset| (offset, Threat::Markup));

        let protocols = Scheme::ALL.into_iter().filter_map(|scheme| {
            scheme
                .pattern()
                .find(text)
                .map(|m| (m.start(), Threat::Protocol(scheme)))
        });

        let handler = HANDLER_ATTRIBUTE
            .find(text)
            .map(|m| (m.start(), Threat::HandlerAttribute));

        let event = EVENT_TOKEN
            .find(text)
            .map(|m| (m.start(), Threat::EventName));

        markup
            .into_iter()
            .chain(protocols)
            .chain(handler)
            .chain(event)
            .min_by_key(|(offset, _)| *offset)
    }
}
