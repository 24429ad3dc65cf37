//! Tick outcomes and engine snapshots.

use crate::core::NodeIndex;
use serde::{Deserialize, Serialize};

/// Where the tick executor stands between ticks.
///
/// "Transition pending" is not listed: it only exists inside a tick, between
/// planning and the action call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// `current == target`; ticks are no-ops.
    AtTarget,
    /// The next tick will plan before firing.
    PlanningNeeded,
    /// The committed transition failed and will be retried as is.
    Retrying,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Already at the target. Nothing happened.
    AtTarget,

    /// One hop completed.
    Advanced { from: NodeIndex, to: NodeIndex },

    /// The committed transition's action reported failure.
    /// `attempts` counts consecutive failures of this same transition.
    Failed {
        source: NodeIndex,
        destination: NodeIndex,
        attempts: usize,
    },

    /// No available path leads from the current node to the target.
    Unreachable,
}

impl TickOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Endpoints of a committed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub source: NodeIndex,
    pub destination: NodeIndex,
}

/// Serializable snapshot of an engine, for diagnostics.
///
/// Transitions themselves are not included; their actions are opaque.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub current: NodeIndex,
    pub target: NodeIndex,
    pub phase: Phase,
    pub committed: Option<Hop>,
    pub attempts: usize,
    pub registered: usize,
    pub transitions_capacity: usize,
    pub nodes_capacity: usize,
}
