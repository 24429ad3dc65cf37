//! Node indices and the `Node` trait.
//!
//! Nodes are opaque checkpoints in the transition graph. The engine only
//! ever sees a small integer; what a node *means* is up to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a vertex in the transition graph.
///
/// Values `0..=254` are usable node indices. `255` is reserved as
/// [`NodeIndex::NONE`], the "no value" sentinel, and can never be the
/// endpoint of a registered transition.
///
/// # Example
///
/// ```rust
/// use goalfsm::core::NodeIndex;
///
/// let idle = NodeIndex::new(0);
/// assert_eq!(idle.get(), 0);
/// assert!(!idle.is_none());
/// assert!(NodeIndex::NONE.is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(u8);

impl NodeIndex {
    /// Reserved sentinel meaning "no node".
    pub const NONE: NodeIndex = NodeIndex(u8::MAX);

    /// Largest number of distinct usable node indices.
    pub const MAX_NODES: usize = u8::MAX as usize;

    pub const fn new(value: u8) -> Self {
        NodeIndex(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Position of this node in a buffer indexed by node.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub const fn is_none(self) -> bool {
        self.0 == u8::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

impl From<u8> for NodeIndex {
    fn from(value: u8) -> Self {
        NodeIndex(value)
    }
}

impl From<NodeIndex> for u8 {
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("NodeIndex(NONE)")
        } else {
            write!(f, "NodeIndex({})", self.0)
        }
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Caller-side name for a node.
///
/// Implement this for an enum whose variants are the checkpoints of a
/// control loop, or let [`node_enum!`](crate::node_enum) generate it.
///
/// # Example
///
/// ```rust
/// use goalfsm::core::{Node, NodeIndex};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Valve {
///     Closed,
///     Open,
/// }
///
/// impl Node for Valve {
///     fn index(&self) -> NodeIndex {
///         NodeIndex::new(*self as u8)
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(Valve::Open.index(), NodeIndex::new(1));
/// ```
pub trait Node: Copy + PartialEq + fmt::Debug {
    /// Index used by the engine for this node.
    fn index(&self) -> NodeIndex;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Pump {
        Off,
        Priming,
        Running,
    }

    impl Node for Pump {
        fn index(&self) -> NodeIndex {
            NodeIndex::new(*self as u8)
        }

        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::Priming => "Priming",
                Self::Running => "Running",
            }
        }
    }

    #[test]
    fn sentinel_is_reserved_max_value() {
        assert_eq!(NodeIndex::NONE.get(), 255);
        assert!(NodeIndex::NONE.is_none());
        assert!(!NodeIndex::new(254).is_none());
        assert_eq!(NodeIndex::default(), NodeIndex::NONE);
    }

    #[test]
    fn node_trait_maps_variants_to_indices() {
        assert_eq!(Pump::Off.index(), NodeIndex::new(0));
        assert_eq!(Pump::Priming.index(), NodeIndex::new(1));
        assert_eq!(Pump::Running.index(), NodeIndex::new(2));
        assert_eq!(Pump::Running.name(), "Running");
    }

    #[test]
    fn display_and_debug_show_sentinel() {
        assert_eq!(NodeIndex::new(7).to_string(), "7");
        assert_eq!(NodeIndex::NONE.to_string(), "none");
        assert_eq!(format!("{:?}", NodeIndex::NONE), "NodeIndex(NONE)");
    }

    #[test]
    fn node_index_serializes_as_plain_integer() {
        let json = serde_json::to_string(&NodeIndex::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: NodeIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeIndex::new(3));
    }
}
