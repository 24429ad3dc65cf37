//! Engine error types.

use crate::config::violations::{describe, ConfigViolation};
use thiserror::Error;

/// Errors reported synchronously by engine entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The registry already holds `capacity` transitions.
    #[error("transition registry is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// The transition was never registered, or was already removed.
    #[error("transition is not registered")]
    NotFound,

    /// Registering the transition would make the graph span more distinct
    /// nodes than the planner has room for.
    #[error("graph would span more than {nodes_capacity} distinct nodes")]
    NodeCapacityExceeded { nodes_capacity: usize },

    /// A transition endpoint is the reserved `NodeIndex::NONE`.
    #[error("the reserved node index cannot be a transition endpoint")]
    ReservedNode,

    #[error("invalid engine configuration: {}", describe(.violations))]
    InvalidConfig { violations: Vec<ConfigViolation> },

    #[error("failed to allocate {what} buffer of {requested} slots")]
    Allocation {
        what: &'static str,
        requested: usize,
    },
}
