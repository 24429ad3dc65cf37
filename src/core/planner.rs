//! Next-step planning.
//!
//! The planner answers one question: which transition should fire next to
//! move from `current` toward `target`? It runs a breadth-first search
//! backwards from the target and stops at the first available transition
//! whose source is the current node. Only that hop is returned. The rest of
//! the route is rediscovered on later ticks.
//!
//! All bookkeeping lives in a caller-provided scratch buffer laid out as
//!
//! ```text
//! [ consumed | expanding | discovered | unused ]
//! ```
//!
//! The whole used prefix doubles as the visited set, so memory stays at one
//! slot per node regardless of how many transitions are registered.

use super::node::NodeIndex;
use super::transition::Transition;
use thiserror::Error;

/// Failure of the planner itself, as opposed to an unreachable target.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("planner scratch buffer is empty")]
    EmptyScratch,

    #[error("planner scratch buffer exhausted after {visited} nodes")]
    ScratchExhausted { visited: usize },
}

/// Find the transition to fire next.
///
/// Returns `Ok(None)` when `current == target` or when the target cannot be
/// reached from `current` over available transitions. Among transitions at
/// the minimum hop distance, the first one in `transitions` order wins.
/// Self-loops are never selected.
///
/// `scratch` needs one slot per distinct node the search can visit. Engines
/// guarantee this by rejecting endpoints outside the buffer; direct callers
/// get [`PlanError::ScratchExhausted`] instead of an out-of-bounds write.
///
/// # Example
///
/// ```rust
/// use goalfsm::core::{next_step, NodeIndex, Transition};
///
/// let a = Transition::new(0, 1);
/// let b = Transition::new(1, 2);
/// let mut scratch = [NodeIndex::NONE; 3];
///
/// let hop = next_step([&a, &b], NodeIndex::new(0), NodeIndex::new(2), &mut scratch)
///     .unwrap()
///     .unwrap();
/// assert!(hop.same(&a));
/// ```
pub fn next_step<'t, I>(
    transitions: I,
    current: NodeIndex,
    target: NodeIndex,
    scratch: &mut [NodeIndex],
) -> Result<Option<&'t Transition>, PlanError>
where
    I: IntoIterator<Item = &'t Transition>,
    I::IntoIter: Clone,
{
    if current == target {
        return Ok(None);
    }
    if scratch.is_empty() {
        return Err(PlanError::EmptyScratch);
    }

    let transitions = transitions.into_iter();
    scratch[0] = target;

    let mut expanding = 0..1;
    while !expanding.is_empty() {
        let mut discovered = expanding.end;

        for slot in expanding.clone() {
            let node = scratch[slot];

            for transition in transitions.clone() {
                if transition.destination() != node
                    || !transition.is_available()
                    || transition.is_self_loop()
                {
                    continue;
                }

                let predecessor = transition.source();
                if predecessor == current {
                    return Ok(Some(transition));
                }
                if scratch[..discovered].contains(&predecessor) {
                    continue;
                }
                if discovered == scratch.len() {
                    return Err(PlanError::ScratchExhausted {
                        visited: discovered,
                    });
                }
                scratch[discovered] = predecessor;
                discovered += 1;
            }
        }

        expanding = expanding.end..discovered;
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan<'t>(
        transitions: &[&'t Transition],
        current: u8,
        target: u8,
        nodes: usize,
    ) -> Option<&'t Transition> {
        let mut scratch = vec![NodeIndex::NONE; nodes];
        next_step(
            transitions.iter().copied(),
            NodeIndex::new(current),
            NodeIndex::new(target),
            &mut scratch,
        )
        .unwrap()
    }

    #[test]
    fn no_step_when_already_at_target() {
        let a = Transition::new(0, 1);
        assert!(plan(&[&a], 1, 1, 2).is_none());
    }

    #[test]
    fn direct_edge_is_returned() {
        let a = Transition::new(0, 1);
        let hop = plan(&[&a], 0, 1, 2).unwrap();
        assert!(hop.same(&a));
    }

    #[test]
    fn first_hop_of_a_chain_is_returned() {
        let a = Transition::new(0, 1);
        let b = Transition::new(1, 2);
        let c = Transition::new(2, 3);

        let hop = plan(&[&c, &b, &a], 0, 3, 4).unwrap();
        assert!(hop.same(&a));
    }

    #[test]
    fn shortest_route_wins_over_registration_order() {
        // 0 -> 1 -> 2 -> 3 registered first, shortcut 0 -> 4 -> 3 last.
        let long_a = Transition::new(0, 1);
        let long_b = Transition::new(1, 2);
        let long_c = Transition::new(2, 3);
        let short_a = Transition::new(0, 4);
        let short_b = Transition::new(4, 3);

        let hop = plan(&[&long_a, &long_b, &long_c, &short_a, &short_b], 0, 3, 5).unwrap();
        assert!(hop.same(&short_a));
    }

    #[test]
    fn ties_resolve_in_scan_order() {
        let first = Transition::new(0, 1);
        let second = Transition::new(0, 1);

        let hop = plan(&[&first, &second], 0, 1, 2).unwrap();
        assert!(hop.same(&first));
    }

    #[test]
    fn blocked_edges_are_ignored() {
        let direct = Transition::new(0, 2);
        let via_a = Transition::new(0, 1);
        let via_b = Transition::new(1, 2);
        direct.set_state(crate::core::TransitionState::Blocked);

        let hop = plan(&[&direct, &via_a, &via_b], 0, 2, 3).unwrap();
        assert!(hop.same(&via_a));

        via_b.set_state(crate::core::TransitionState::Blocked);
        assert!(plan(&[&direct, &via_a, &via_b], 0, 2, 3).is_none());
    }

    #[test]
    fn unreachable_target_yields_none() {
        let a = Transition::new(1, 0);
        let b = Transition::new(2, 1);
        assert!(plan(&[&a, &b], 0, 2, 3).is_none());
    }

    #[test]
    fn self_loops_are_never_selected() {
        let spin = Transition::new(0, 0);
        assert!(plan(&[&spin], 0, 1, 2).is_none());

        let spin_at_target = Transition::new(1, 1);
        let hop = Transition::new(0, 1);
        let chosen = plan(&[&spin_at_target, &hop], 0, 1, 2).unwrap();
        assert!(chosen.same(&hop));
    }

    #[test]
    fn cycles_do_not_revisit_nodes() {
        let a = Transition::new(1, 2);
        let b = Transition::new(2, 1);
        let c = Transition::new(3, 1);
        let d = Transition::new(0, 3);

        // Scratch of exactly four slots covers target plus three predecessors.
        let hop = plan(&[&a, &b, &c, &d], 0, 2, 4).unwrap();
        assert!(hop.same(&d));
    }

    #[test]
    fn empty_scratch_is_an_error() {
        let a = Transition::new(0, 1);
        let result = next_step([&a], NodeIndex::new(0), NodeIndex::new(1), &mut []);
        assert_eq!(result.unwrap_err(), PlanError::EmptyScratch);
    }

    #[test]
    fn undersized_scratch_reports_exhaustion() {
        let a = Transition::new(5, 9);
        let b = Transition::new(6, 9);
        let mut scratch = [NodeIndex::NONE; 2];

        let result = next_step([&a, &b], NodeIndex::new(0), NodeIndex::new(9), &mut scratch);
        assert_eq!(
            result.unwrap_err(),
            PlanError::ScratchExhausted { visited: 2 }
        );
    }
}
