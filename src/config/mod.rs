//! Engine sizing configuration.
//!
//! An engine is sized once, up front: how many transitions its registry can
//! hold and how many nodes its planner can visit. Both bounds are checked
//! with Stillwater's `Validation`, so a bad configuration reports every
//! problem at once instead of the first one found.
//!
//! # Example
//!
//! ```rust
//! use goalfsm::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "transitions_capacity": 4, "nodes_capacity": 3 }"#)
//!     .unwrap();
//! assert!(config.check().is_ok());
//!
//! let broken = EngineConfig { transitions_capacity: 0, nodes_capacity: 0 };
//! assert_eq!(broken.check().unwrap_err().len(), 2);
//! ```

pub mod violations;

pub use violations::ConfigViolation;

use crate::core::NodeIndex;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest registry the engine supports.
pub const MAX_TRANSITIONS: usize = u8::MAX as usize;

/// Largest planner scratch buffer the engine supports.
pub const MAX_NODES: usize = NodeIndex::MAX_NODES;

/// Capacities for a single engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of registered transitions.
    pub transitions_capacity: usize,

    /// Maximum number of distinct nodes the registered transitions may span.
    pub nodes_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transitions_capacity: 8,
            nodes_capacity: 16,
        }
    }
}

impl EngineConfig {
    pub fn new(transitions_capacity: usize, nodes_capacity: usize) -> Self {
        Self {
            transitions_capacity,
            nodes_capacity,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate both capacities, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            check_bound(
                self.transitions_capacity,
                MAX_TRANSITIONS,
                ConfigViolation::NoTransitionSlots,
                |requested, max| ConfigViolation::TooManyTransitions { requested, max },
            ),
            check_bound(
                self.nodes_capacity,
                MAX_NODES,
                ConfigViolation::NoNodeSlots,
                |requested, max| ConfigViolation::TooManyNodes { requested, max },
            ),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) flattened into a `Result`.
    pub fn check(&self) -> Result<(), Vec<ConfigViolation>> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(violations.iter().copied().collect()),
        }
    }
}

fn check_bound(
    requested: usize,
    max: usize,
    empty: ConfigViolation,
    too_large: impl Fn(usize, usize) -> ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if requested == 0 {
        Validation::fail(empty)
    } else if requested > max {
        Validation::fail(too_large(requested, max))
    } else {
        Validation::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.transitions_capacity, 8);
        assert_eq!(config.nodes_capacity, 16);
    }

    #[test]
    fn limits_are_inclusive() {
        let config = EngineConfig::new(MAX_TRANSITIONS, MAX_NODES);
        assert!(config.check().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = EngineConfig::new(0, MAX_NODES + 1);

        match config.validate() {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::NoTransitionSlots)));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, ConfigViolation::TooManyNodes { requested: 256, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn single_violation_is_reported_alone() {
        let violations = EngineConfig::new(MAX_TRANSITIONS + 5, 4).check().unwrap_err();
        assert_eq!(
            violations,
            vec![ConfigViolation::TooManyTransitions {
                requested: 260,
                max: 255
            }]
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = EngineConfig::from_json(r#"{ "nodes_capacity": 3 }"#).unwrap();
        assert_eq!(config, EngineConfig::new(8, 3));
    }

    #[test]
    fn json_rejects_wrong_types() {
        assert!(EngineConfig::from_json(r#"{ "nodes_capacity": "many" }"#).is_err());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = EngineConfig::new(12, 40);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
