//! Bounded fixed-point iteration.
//!
//! Every stripping pass in this crate is a rewrite that can expose a new match
//! once an inner one is removed (`jajavascript:vascript:` collapses one layer
//! per pass). [`converge`] reapplies such a rewrite until it stops changing the
//! text, but never more than a fixed number of times, so adversarial nesting
//! costs at most `max_passes` linear scans.

use std::borrow::Cow;

/// Default number of passes allowed for a single rewrite.
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Outcome of driving a rewrite towards its fixed point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPoint {
    /// Text after the last applied pass
    pub value: String,

    /// Number of times the rewrite was invoked
    pub passes: usize,

    /// `true` if the last pass left the text unchanged
    pub converged: bool,
}

impl FixedPoint {
    /// A value that needed no work at all.
    pub fn settled(value: String) -> Self {
        Self {
            value,
            passes: 0,
            converged: true,
        }
    }
}

/// Apply `step` until it returns the text unchanged or `max_passes` is spent.
///
/// `step` signals "no change" by returning [`Cow::Borrowed`], which is what
/// `Regex::replace_all` does when nothing matched.
pub fn converge<F>(input: &str, max_passes: usize, mut step: F) -> FixedPoint
where
    F: for<'a> FnMut(&'a str) -> Cow<'a, str>,
{
    let mut value = input.to_string();
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;

        let next = match step(&value) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };

        match next {
            Some(next) if next != value => value = next,
            _ => {
                return FixedPoint {
                    value,
                    passes,
                    converged: true,
                };
            }
        }
    }

    FixedPoint {
        value,
        passes,
        converged: false,
    }
}
