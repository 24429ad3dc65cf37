//! Transition descriptors.

use super::action::{TransitionAction, TransitionResult};
use super::node::NodeIndex;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Whether a transition takes part in planning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionState {
    /// Usable by the planner.
    #[default]
    Available,
    /// Ignored by the planner until made available again.
    Blocked,
}

/// A directed edge of the transition graph.
///
/// A transition's identity is its address: the engine stores references,
/// never copies, and [`Engine::unregister`](crate::engine::Engine::unregister)
/// matches by pointer. Source, destination and action are fixed at
/// construction. Only the enabled state changes afterwards, and only
/// through [`Engine::set_enabled`](crate::engine::Engine::set_enabled).
///
/// # Example
///
/// ```rust
/// use goalfsm::core::{NodeIndex, Transition, TransitionState};
///
/// let start = Transition::new(0, 1);
/// assert_eq!(start.source(), NodeIndex::new(0));
/// assert_eq!(start.destination(), NodeIndex::new(1));
/// assert_eq!(start.state(), TransitionState::Available);
/// assert!(!start.has_action());
/// ```
pub struct Transition {
    source: NodeIndex,
    destination: NodeIndex,
    action: Option<Box<dyn TransitionAction>>,
    state: Cell<TransitionState>,
}

impl Transition {
    /// Unconditional transition: firing it always succeeds.
    pub fn new(source: impl Into<NodeIndex>, destination: impl Into<NodeIndex>) -> Self {
        Transition {
            source: source.into(),
            destination: destination.into(),
            action: None,
            state: Cell::new(TransitionState::Available),
        }
    }

    /// Transition whose hop is attempted by `action`.
    pub fn with_action<A>(
        source: impl Into<NodeIndex>,
        destination: impl Into<NodeIndex>,
        action: A,
    ) -> Self
    where
        A: TransitionAction + 'static,
    {
        Transition {
            action: Some(Box::new(action)),
            ..Transition::new(source, destination)
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    pub fn state(&self) -> TransitionState {
        self.state.get()
    }

    pub fn is_available(&self) -> bool {
        self.state.get() == TransitionState::Available
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Run the action once. An absent action always succeeds.
    pub fn attempt(&self) -> TransitionResult {
        match &self.action {
            Some(action) => action.attempt(self),
            None => TransitionResult::Success,
        }
    }

    /// Same transition object, by address.
    pub fn same(&self, other: &Transition) -> bool {
        std::ptr::eq(self, other)
    }

    pub(crate) fn set_state(&self, state: TransitionState) {
        self.state.set(state);
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("has_action", &self.action.is_some())
            .field("state", &self.state.get())
            .finish()
    }
}
