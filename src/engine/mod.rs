//! The engine: registry, buffers and the per-tick executor.
//!
//! This is the imperative shell around the pure planner in [`crate::core`].
//! It owns the mutable state of a running machine (current node, target,
//! the committed transition and the sticky re-plan flags) and changes it only
//! through its documented entry points.
//!
//! # Memory
//!
//! An engine never grows. Its two buffers are sized once:
//! - [`Engine::new`] / [`Engine::from_config`] allocate them a single time
//! - [`Engine::with_buffers`] borrows caller slices
//! - [`Engine::from_storage`] borrows an [`EngineStorage`] sized by const
//!   generics
//!
//! Borrowed buffers are never freed by the engine.

mod buffer;
mod error;
mod machine;
mod registry;
mod status;
mod storage;

pub use error::EngineError;
pub use machine::Engine;
pub use registry::TransitionRegistry;
pub use status::{EngineStatus, Hop, Phase, TickOutcome};
pub use storage::EngineStorage;
