//! Graph primitives and the next-step planner.
//!
//! This module holds everything that does not depend on engine state:
//! - Node indices and the `Node` naming trait
//! - Transitions and their actions
//! - The reverse breadth-first planner
//!
//! The planner is a pure function over a transition list and a scratch
//! buffer, so it can be exercised without an engine.

mod action;
mod node;
mod planner;
mod transition;

pub use action::{Guard, TransitionAction, TransitionResult};
pub use node::{Node, NodeIndex};
pub use planner::{next_step, PlanError};
pub use transition::{Transition, TransitionState};
