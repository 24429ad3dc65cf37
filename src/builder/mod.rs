//! Builder API for ergonomic engine construction.
//!
//! This module provides a fluent builder, the `node_enum!` macro and small
//! helpers for constructing transitions with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::EngineBuilder;

use crate::core::{Guard, NodeIndex, Transition};

/// Create a transition that fires once `probe` reports ready.
///
/// # Example
///
/// ```
/// use goalfsm::builder::guarded_transition;
/// use goalfsm::core::TransitionResult;
///
/// let transition = guarded_transition(0, 1, || false);
/// assert_eq!(transition.attempt(), TransitionResult::Failure);
/// ```
pub fn guarded_transition<F>(
    source: impl Into<NodeIndex>,
    destination: impl Into<NodeIndex>,
    probe: F,
) -> Transition
where
    F: Fn() -> bool + 'static,
{
    Transition::with_action(source, destination, Guard::new(probe))
}
