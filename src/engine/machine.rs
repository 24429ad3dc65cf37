//! Goal-directed engine and its tick executor.

use crate::config::EngineConfig;
use crate::core::{next_step, NodeIndex, Transition, TransitionResult, TransitionState};
use crate::engine::buffer::Buffer;
use crate::engine::error::EngineError;
use crate::engine::registry::TransitionRegistry;
use crate::engine::status::{EngineStatus, Hop, Phase, TickOutcome};
use crate::engine::storage::EngineStorage;
use tracing::{debug, trace, warn};

/// A goal-directed state machine.
///
/// The caller registers transitions, sets the current and target nodes, and
/// calls [`tick`](Self::tick) from its control loop. Each tick advances at
/// most one hop toward the target. The route is re-planned whenever the
/// current node, the target, or the graph changes, and after every
/// successful hop.
///
/// `'t` is the lifetime of the registered transitions, which stay owned by
/// the caller. `'b` is the lifetime of borrowed backing storage; engines
/// built with [`Engine::new`] own theirs.
///
/// # Example
///
/// ```rust
/// use goalfsm::core::Transition;
/// use goalfsm::engine::{Engine, TickOutcome};
///
/// let start = Transition::new(0, 1);
/// let finish = Transition::new(1, 2);
///
/// let mut engine = Engine::new(4, 3).unwrap();
/// engine.register(&start).unwrap();
/// engine.register(&finish).unwrap();
/// engine.set_target(2);
///
/// assert!(engine.tick().advanced());
/// assert!(engine.tick().advanced());
/// assert_eq!(engine.tick(), TickOutcome::AtTarget);
/// assert_eq!(engine.current().get(), 2);
/// ```
pub struct Engine<'t, 'b> {
    registry: TransitionRegistry<'t, 'b>,
    scratch: Buffer<'b, NodeIndex>,
    current: NodeIndex,
    target: NodeIndex,
    committed: Option<&'t Transition>,
    attempts: usize,
    endpoints_changed: bool,
    last_failed: bool,
    topology_changed: bool,
}

impl<'t, 'b> Engine<'t, 'b> {
    /// Allocate an engine with room for `transitions_capacity` transitions
    /// spanning at most `nodes_capacity` distinct nodes.
    pub fn new(transitions_capacity: usize, nodes_capacity: usize) -> Result<Self, EngineError> {
        Self::from_config(EngineConfig::new(transitions_capacity, nodes_capacity))
    }

    /// Allocate an engine sized by `config`.
    pub fn from_config(config: EngineConfig) -> Result<Self, EngineError> {
        validate(&config)?;
        let slots = Buffer::allocate("registry", config.transitions_capacity, None)?;
        let scratch = Buffer::allocate("planner", config.nodes_capacity, NodeIndex::NONE)?;
        Ok(Self::assemble(slots, scratch))
    }

    /// Build an engine over caller-supplied buffers.
    ///
    /// `slots.len()` is the registry capacity and `scratch.len()` the number
    /// of distinct nodes the graph may span. Both buffers are reset; neither is ever freed by the engine.
    pub fn with_buffers(
        slots: &'b mut [Option<&'t Transition>],
        scratch: &'b mut [NodeIndex],
    ) -> Result<Self, EngineError> {
        validate(&EngineConfig::new(slots.len(), scratch.len()))?;
        Ok(Self::assemble(Buffer::Borrowed(slots), Buffer::Borrowed(scratch)))
    }

    /// Build an engine over compile-time sized [`EngineStorage`].
    pub fn from_storage<const TRANSITIONS: usize, const NODES: usize>(
        storage: &'b mut EngineStorage<'t, TRANSITIONS, NODES>,
    ) -> Result<Self, EngineError> {
        Self::with_buffers(&mut storage.slots, &mut storage.scratch)
    }

    fn assemble(
        slots: Buffer<'b, Option<&'t Transition>>,
        mut scratch: Buffer<'b, NodeIndex>,
    ) -> Self {
        scratch.clear(NodeIndex::NONE);
        let engine = Self {
            registry: TransitionRegistry::new(slots),
            scratch,
            current: NodeIndex::new(0),
            target: NodeIndex::new(0),
            committed: None,
            attempts: 0,
            endpoints_changed: true,
            last_failed: false,
            topology_changed: true,
        };
        debug!(
            transitions_capacity = engine.registry.capacity(),
            nodes_capacity = engine.nodes_capacity(),
            owned = engine.registry.owns_storage(),
            "engine initialized"
        );
        engine
    }

    /// Return to the freshly initialized state: empty registry, current and
    /// target at node 0, every flag as after construction.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.scratch.clear(NodeIndex::NONE);
        self.current = NodeIndex::new(0);
        self.target = NodeIndex::new(0);
        self.committed = None;
        self.attempts = 0;
        self.endpoints_changed = true;
        self.last_failed = false;
        self.topology_changed = true;
        debug!("engine reset");
    }

    /// Retire the engine. Owned buffers are freed; borrowed buffers go back
    /// to their owner untouched.
    pub fn release(self) {
        debug!(
            owned = self.registry.owns_storage(),
            registered = self.registry.len(),
            "engine released"
        );
    }

    /// Add a transition to the graph.
    ///
    /// Node indices need not be dense: any index other than
    /// [`NodeIndex::NONE`] is accepted as long as the graph spans at most
    /// `nodes_capacity` distinct nodes.
    ///
    /// Fails with [`EngineError::CapacityExceeded`] when the registry is
    /// full, [`EngineError::ReservedNode`] for a `NONE` endpoint and
    /// [`EngineError::NodeCapacityExceeded`] when the new endpoints would not
    /// fit in the planner. The registry is unchanged on failure.
    pub fn register(&mut self, transition: &'t Transition) -> Result<(), EngineError> {
        if self.registry.is_full() {
            return Err(EngineError::CapacityExceeded {
                capacity: self.registry.capacity(),
            });
        }
        if transition.source().is_none() || transition.destination().is_none() {
            return Err(EngineError::ReservedNode);
        }
        self.check_node_room(transition)?;

        self.registry.insert(transition)?;
        self.topology_changed = true;
        debug!(
            source = %transition.source(),
            destination = %transition.destination(),
            registered = self.registry.len(),
            "transition registered"
        );
        Ok(())
    }

    /// Remove a transition from the graph, matched by identity.
    pub fn unregister(&mut self, transition: &Transition) -> Result<(), EngineError> {
        self.registry.remove(transition)?;
        self.topology_changed = true;
        debug!(
            source = %transition.source(),
            destination = %transition.destination(),
            registered = self.registry.len(),
            "transition unregistered"
        );
        Ok(())
    }

    /// Block or unblock a transition. Takes effect on the next plan.
    pub fn set_enabled(&mut self, transition: &Transition, state: TransitionState) {
        transition.set_state(state);
        self.topology_changed = true;
        debug!(
            source = %transition.source(),
            destination = %transition.destination(),
            ?state,
            "transition state changed"
        );
    }

    pub fn set_current(&mut self, node: impl Into<NodeIndex>) {
        self.current = node.into();
        self.endpoints_changed = true;
    }

    /// Aim the engine at a new node. Any in-flight plan is dropped on the
    /// next tick.
    pub fn set_target(&mut self, node: impl Into<NodeIndex>) {
        self.target = node.into();
        self.endpoints_changed = true;
    }

    /// Advance the state machine by at most one hop.
    ///
    /// # Panics
    ///
    /// Panics if the planner's scratch buffer overflows. Registration keeps
    /// the number of distinct endpoints within the buffer, so this indicates
    /// a broken engine invariant rather than a runtime condition.
    pub fn tick(&mut self) -> TickOutcome {
        if self.current == self.target {
            trace!(node = %self.current, "at target");
            return TickOutcome::AtTarget;
        }

        if self.needs_plan() {
            self.committed = self.plan();
            self.endpoints_changed = false;
            self.topology_changed = false;
            self.attempts = 0;
        }

        let Some(transition) = self.committed else {
            self.last_failed = false;
            warn!(
                current = %self.current,
                target = %self.target,
                "target unreachable from current node"
            );
            return TickOutcome::Unreachable;
        };

        match transition.attempt() {
            TransitionResult::Success => {
                let from = self.current;
                self.current = transition.destination();
                self.committed = None;
                self.attempts = 0;
                self.last_failed = false;
                debug!(%from, to = %self.current, target = %self.target, "hop completed");
                TickOutcome::Advanced {
                    from,
                    to: self.current,
                }
            }
            TransitionResult::Failure => {
                self.last_failed = true;
                self.attempts = self.attempts.saturating_add(1);
                trace!(
                    source = %transition.source(),
                    destination = %transition.destination(),
                    attempts = self.attempts,
                    "transition failed, will retry"
                );
                TickOutcome::Failed {
                    source: transition.source(),
                    destination: transition.destination(),
                    attempts: self.attempts,
                }
            }
        }
    }

    pub fn current(&self) -> NodeIndex {
        self.current
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    /// The transition awaiting retry, if the last attempt failed.
    pub fn committed(&self) -> Option<&'t Transition> {
        self.committed
    }

    pub fn registry(&self) -> &TransitionRegistry<'t, 'b> {
        &self.registry
    }

    pub fn nodes_capacity(&self) -> usize {
        self.scratch.len()
    }

    pub fn phase(&self) -> Phase {
        if self.current == self.target {
            Phase::AtTarget
        } else if self.needs_plan() {
            Phase::PlanningNeeded
        } else {
            Phase::Retrying
        }
    }

    /// Snapshot for diagnostics.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            current: self.current,
            target: self.target,
            phase: self.phase(),
            committed: self.committed.map(|t| Hop {
                source: t.source(),
                destination: t.destination(),
            }),
            attempts: self.attempts,
            registered: self.registry.len(),
            transitions_capacity: self.registry.capacity(),
            nodes_capacity: self.nodes_capacity(),
        }
    }

    fn needs_plan(&self) -> bool {
        !self.last_failed || self.endpoints_changed || self.topology_changed
    }

    fn plan(&mut self) -> Option<&'t Transition> {
        let step = next_step(
            self.registry.iter(),
            self.current,
            self.target,
            &mut self.scratch,
        )
        .unwrap_or_else(|err| panic!("planner invariant violated: {err}"));

        debug!(
            current = %self.current,
            target = %self.target,
            next = ?step.map(|t| t.destination()),
            "planned next step"
        );
        step
    }

    /// Collect the distinct endpoints of the registry plus `candidate` in the
    /// scratch buffer. The planner only visits the target and registered
    /// sources, so a graph whose endpoints fit here can always be searched.
    fn check_node_room(&mut self, candidate: &'t Transition) -> Result<(), EngineError> {
        let nodes_capacity = self.scratch.len();
        let endpoints = self
            .registry
            .iter()
            .chain([candidate])
            .flat_map(|t| [t.source(), t.destination()]);

        let mut distinct = 0;
        for node in endpoints {
            if self.scratch[..distinct].contains(&node) {
                continue;
            }
            if distinct == nodes_capacity {
                return Err(EngineError::NodeCapacityExceeded { nodes_capacity });
            }
            self.scratch[distinct] = node;
            distinct += 1;
        }
        Ok(())
    }
}

fn validate(config: &EngineConfig) -> Result<(), EngineError> {
    config
        .check()
        .map_err(|violations| EngineError::InvalidConfig { violations })
}
