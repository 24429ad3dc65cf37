//! Configuration violations.

use thiserror::Error;

/// A single reason an engine configuration is unusable.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("transitions capacity must be at least 1")]
    NoTransitionSlots,

    #[error("transitions capacity {requested} exceeds the maximum of {max}")]
    TooManyTransitions { requested: usize, max: usize },

    #[error("nodes capacity must be at least 1")]
    NoNodeSlots,

    #[error("nodes capacity {requested} exceeds the maximum of {max}")]
    TooManyNodes { requested: usize, max: usize },
}

/// Render a list of violations as one line.
pub(crate) fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
