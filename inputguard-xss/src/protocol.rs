//! Dangerous URI scheme removal.

use crate::fixed_point::{DEFAULT_MAX_PASSES, FixedPoint, converge};
use once_cell::sync::Lazy;
use regex::Regex;

static JAVASCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript\s*:\s*").unwrap());

static DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)data\s*:\s*").unwrap());

static VBSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)vbscript\s*:\s*").unwrap());

// Takes every slash after `file:` along with the scheme.
static FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)file\s*:\s*//+").unwrap());

static ABOUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)about\s*:\s*").unwrap());

/// URI schemes that can execute or smuggle content when placed in a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    JavaScript,
    Data,
    VbScript,
    File,
    About,
}

impl Scheme {
    /// Schemes in the order they are stripped.
    pub const ALL: [Scheme; 5] = [
        Scheme::JavaScript,
        Scheme::Data,
        Scheme::VbScript,
        Scheme::File,
        Scheme::About,
    ];

    /// Canonical spelling of the scheme token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::JavaScript => "javascript:",
            Scheme::Data => "data:",
            Scheme::VbScript => "vbscript:",
            Scheme::File => "file://",
            Scheme::About => "about:",
        }
    }

    pub(crate) fn pattern(&self) -> &'static Regex {
        match self {
            Scheme::JavaScript => &*JAVASCRIPT,
            Scheme::Data => &*DATA,
            Scheme::VbScript => &*VBSCRIPT,
            Scheme::File => &*FILE,
            Scheme::About => &*ABOUT,
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Removes dangerous URI schemes, re-scanning until nested tokens are gone.
///
/// Each scheme is driven to its own fixed point before the next one is
/// considered: removing `javascript:` from `jajavascript:vascript:` leaves a
/// fresh `javascript:` that the following pass picks up.
#[derive(Debug, Clone)]
pub struct ProtocolStripper {
    max_passes: usize,
}

impl ProtocolStripper {
    /// Create a stripper with the default pass limit
    pub fn new() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Set the pass limit applied to each scheme
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Strip every scheme from `input`.
    pub fn strip(&self, input: &str) -> String {
        self.run(input).value
    }

    /// Strip a single scheme to its fixed point.
    pub fn strip_scheme(&self, input: &str, scheme: Scheme) -> FixedPoint {
        let pattern = scheme.pattern();
        converge(input, self.max_passes, |text| pattern.replace_all(text, ""))
    }

    /// Strip every scheme, reporting total passes and whether all converged.
    pub fn run(&self, input: &str) -> FixedPoint {
        let mut outcome = FixedPoint::settled(input.to_string());

        for scheme in Scheme::ALL {
            let step = self.strip_scheme(&outcome.value, scheme);
            outcome = FixedPoint {
                value: step.value,
                passes: outcome.passes + step.passes,
                converged: outcome.converged && step.converged,
            };
        }

        outcome
    }
}

impl Default for ProtocolStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip dangerous URI schemes using the default pass limit.
pub fn strip_protocols(input: &str) -> String {
    ProtocolStripper::new().strip(input)
}
