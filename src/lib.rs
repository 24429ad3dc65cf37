//! Goalfsm: a goal-directed finite state machine engine
//!
//! A conventional state machine is told which state to enter next. A goalfsm
//! engine is only told where to end up. The caller sets a *target* node and
//! ticks the engine; each tick the engine works out the single transition
//! that moves it one hop closer, fires it, and moves on. When the graph, the
//! current node or the target changes, the plan is thrown away and rebuilt.
//!
//! The engine is built for control loops with tight memory: it never
//! allocates after construction, planning uses one slot per node, and the
//! caller may provide all of the backing storage.
//!
//! # Core Concepts
//!
//! - **Nodes**: opaque small integers; their meaning belongs to the caller
//! - **Transitions**: edges with an optional action that may refuse the hop
//! - **Planner**: reverse breadth-first search from target back to current
//! - **Tick executor**: fires at most one transition per tick, retries
//!   failures, re-plans when something changed
//!
//! # Example
//!
//! ```rust
//! use goalfsm::core::{Transition, TransitionState};
//! use goalfsm::engine::{Engine, TickOutcome};
//! use goalfsm::node_enum;
//!
//! node_enum! {
//!     enum Job {
//!         Idle,
//!         Work,
//!         Done,
//!     }
//! }
//!
//! let start = Transition::new(Job::Idle, Job::Work);
//! let finish = Transition::new(Job::Work, Job::Done);
//!
//! let mut engine = Engine::new(2, Job::ALL.len()).unwrap();
//! engine.register(&start).unwrap();
//! engine.register(&finish).unwrap();
//! engine.set_target(Job::Done);
//!
//! assert!(engine.tick().advanced());
//!
//! engine.set_enabled(&finish, TransitionState::Blocked);
//! assert_eq!(engine.tick(), TickOutcome::Unreachable);
//!
//! engine.set_enabled(&finish, TransitionState::Available);
//! assert!(engine.tick().advanced());
//! assert_eq!(Job::try_from(engine.current()), Ok(Job::Done));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use crate::core::{Node, NodeIndex, Transition, TransitionAction, TransitionResult, TransitionState};
pub use engine::{Engine, EngineError, TickOutcome};
