//! Inline engine storage.

use crate::core::{NodeIndex, Transition};

/// Registry slots and planner scratch sized at compile time.
///
/// Place it on the stack, in an arena, or inside a long-lived struct and
/// hand it to [`Engine::from_storage`](crate::engine::Engine::from_storage).
/// The engine borrows it and never frees it.
///
/// # Example
///
/// ```rust
/// use goalfsm::engine::{Engine, EngineStorage};
/// use goalfsm::core::Transition;
///
/// let start = Transition::new(0, 1);
/// let mut storage = EngineStorage::<4, 2>::new();
/// let mut engine = Engine::from_storage(&mut storage).unwrap();
/// engine.register(&start).unwrap();
/// assert_eq!(engine.registry().capacity(), 4);
/// assert_eq!(engine.nodes_capacity(), 2);
/// ```
pub struct EngineStorage<'t, const TRANSITIONS: usize, const NODES: usize> {
    pub(crate) slots: [Option<&'t Transition>; TRANSITIONS],
    pub(crate) scratch: [NodeIndex; NODES],
}

impl<'t, const TRANSITIONS: usize, const NODES: usize> EngineStorage<'t, TRANSITIONS, NODES> {
    pub const fn new() -> Self {
        Self {
            slots: [None; TRANSITIONS],
            scratch: [NodeIndex::NONE; NODES],
        }
    }
}

impl<'t, const TRANSITIONS: usize, const NODES: usize> Default
    for EngineStorage<'t, TRANSITIONS, NODES>
{
    fn default() -> Self {
        Self::new()
    }
}
