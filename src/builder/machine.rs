//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::core::{NodeIndex, Transition};
use crate::engine::Engine;

/// Builder for constructing engines with a fluent API.
///
/// Capacities default to [`EngineConfig::default`]; current and target
/// default to node 0.
pub struct EngineBuilder<'t> {
    config: EngineConfig,
    current: NodeIndex,
    target: Option<NodeIndex>,
    transitions: Vec<&'t Transition>,
}

impl<'t> EngineBuilder<'t> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            current: NodeIndex::new(0),
            target: None,
            transitions: Vec::new(),
        }
    }

    /// Start from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(Self::new().config(EngineConfig::from_json(json)?))
    }

    /// Replace both capacities at once.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transitions_capacity(mut self, capacity: usize) -> Self {
        self.config.transitions_capacity = capacity;
        self
    }

    pub fn nodes_capacity(mut self, capacity: usize) -> Self {
        self.config.nodes_capacity = capacity;
        self
    }

    /// Set the starting node.
    pub fn current(mut self, node: impl Into<NodeIndex>) -> Self {
        self.current = node.into();
        self
    }

    /// Set the goal. Without one the engine starts at rest on `current`.
    pub fn target(mut self, node: impl Into<NodeIndex>) -> Self {
        self.target = Some(node.into());
        self
    }

    /// Register a transition when the engine is built.
    pub fn transition(mut self, transition: &'t Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Register several transitions when the engine is built.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = &'t Transition>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is invalid or a transition
    /// cannot be registered.
    pub fn build<'b>(self) -> Result<Engine<'t, 'b>, BuildError> {
        let mut engine = Engine::from_config(self.config)?;

        for (index, transition) in self.transitions.into_iter().enumerate() {
            engine
                .register(transition)
                .map_err(|source| BuildError::Registration { index, source })?;
        }

        engine.set_current(self.current);
        engine.set_target(self.target.unwrap_or(self.current));
        Ok(engine)
    }
}

impl<'t> Default for EngineBuilder<'t> {
    fn default() -> Self {
        Self::new()
    }
}
