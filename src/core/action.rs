//! Transition actions.
//!
//! An action is the caller's side of a transition: a non-blocking probe or
//! command that either completes the hop or reports that it cannot yet.
//! Returning [`TransitionResult::Failure`] is how guards, delays and
//! rate-limited waits are expressed; the engine simply retries on the next
//! tick.

use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// Outcome of a single action attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionResult {
    /// The hop happened; the engine advances to the destination.
    Success,
    /// The hop did not happen; the engine retries it on the next tick.
    Failure,
}

impl TransitionResult {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<bool> for TransitionResult {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Capability invoked when a transition fires.
///
/// Implementations must return immediately. They receive the transition
/// being attempted and nothing else.
///
/// Any `Fn(&Transition) -> TransitionResult` closure is an action:
///
/// ```rust
/// use goalfsm::core::{Transition, TransitionResult};
///
/// let hop = Transition::with_action(0, 1, |t: &Transition| {
///     assert_eq!(t.destination().get(), 1);
///     TransitionResult::Success
/// });
/// assert!(hop.has_action());
/// ```
pub trait TransitionAction {
    fn attempt(&self, transition: &Transition) -> TransitionResult;
}

impl<F> TransitionAction for F
where
    F: Fn(&Transition) -> TransitionResult,
{
    fn attempt(&self, transition: &Transition) -> TransitionResult {
        self(transition)
    }
}

/// Action built from a readiness probe.
///
/// The hop succeeds once the probe reports `true`. Until then the engine
/// keeps retrying the same transition.
///
/// # Example
///
/// ```rust
/// use goalfsm::core::{Guard, Transition, TransitionAction, TransitionResult};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let door_closed = Rc::new(Cell::new(false));
/// let probe = Rc::clone(&door_closed);
/// let guard = Guard::new(move || probe.get());
///
/// let hop = Transition::new(0, 1);
/// assert_eq!(guard.attempt(&hop), TransitionResult::Failure);
///
/// door_closed.set(true);
/// assert_eq!(guard.attempt(&hop), TransitionResult::Success);
/// ```
pub struct Guard<F> {
    probe: F,
}

impl<F> Guard<F>
where
    F: Fn() -> bool,
{
    pub fn new(probe: F) -> Self {
        Guard { probe }
    }

    pub fn check(&self) -> bool {
        (self.probe)()
    }
}

impl<F> TransitionAction for Guard<F>
where
    F: Fn() -> bool,
{
    fn attempt(&self, _transition: &Transition) -> TransitionResult {
        self.check().into()
    }
}
