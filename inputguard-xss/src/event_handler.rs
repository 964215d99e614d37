//! Inline event-handler removal.

use crate::catalog::EVENT_TOKEN;
use crate::fixed_point::{DEFAULT_MAX_PASSES, FixedPoint, converge};
use once_cell::sync::Lazy;
use regex::Regex;

/// Any `on<word>=` attribute, known event or not.
pub(crate) static HANDLER_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// Removes inline event-handler tokens in two stages.
///
/// Stage one greedily removes anything shaped like `on<word>=` and repeats
/// until nothing matches, which collapses nesting such as `ononclick=`.
/// Stage two makes one more pass that removes bare `on<event>` tokens drawn
/// from the event catalog, catching a handler name left behind without its
/// `=`. Words that only start with "on" (online, once, onboard) are not
/// followed by `=` and are not catalog events, so both stages leave them be.
#[derive(Debug, Clone)]
pub struct EventHandlerStripper {
    max_passes: usize,
}

impl EventHandlerStripper {
    /// Create a stripper with the default pass limit
    pub fn new() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Set the pass limit for the greedy stage
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Run both stages over `input`.
    pub fn strip(&self, input: &str) -> String {
        self.run(input).value
    }

    /// Stage one: remove `on<word>=` until none remain or the limit is hit.
    pub fn strip_attributes(&self, input: &str) -> FixedPoint {
        converge(input, self.max_passes, |text| {
            HANDLER_ATTRIBUTE.replace_all(text, "")
        })
    }

    /// Stage two: a single pass removing bare catalog `on<event>` tokens.
    pub fn strip_catalog_events(&self, input: &str) -> String {
        EVENT_TOKEN.replace_all(input, "").into_owned()
    }

    /// Run both stages, reporting whether the greedy stage converged.
    pub fn run(&self, input: &str) -> FixedPoint {
        let attributes = self.strip_attributes(input);
        FixedPoint {
            value: self.strip_catalog_events(&attributes.value),
            passes: attributes.passes + 1,
            converged: attributes.converged,
        }
    }
}

impl Default for EventHandlerStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip inline event handlers using the default pass limit.
pub fn strip_event_handlers(input: &str) -> String {
    EventHandlerStripper::new().strip(input)
}
