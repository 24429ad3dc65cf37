//! Capacity-bounded transition registry.

use crate::core::Transition;
use crate::engine::buffer::Buffer;
use crate::engine::error::EngineError;

/// The set of transitions an engine plans over.
///
/// Entries are references; the registry never owns, copies or drops a
/// transition. Slots are filled in insertion order, which is also the
/// planner's scan order, but callers should treat the registry as an
/// unordered set.
pub struct TransitionRegistry<'t, 'b> {
    slots: Buffer<'b, Option<&'t Transition>>,
    len: usize,
}

impl<'t, 'b> TransitionRegistry<'t, 'b> {
    pub(crate) fn new(mut slots: Buffer<'b, Option<&'t Transition>>) -> Self {
        slots.clear(None);
        Self { slots, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Whether this exact transition object is registered.
    pub fn contains(&self, transition: &Transition) -> bool {
        self.position(transition).is_some()
    }

    /// Registered transitions in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &'t Transition> + Clone + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }

    pub(crate) fn owns_storage(&self) -> bool {
        self.slots.is_owned()
    }

    pub(crate) fn insert(&mut self, transition: &'t Transition) -> Result<(), EngineError> {
        if self.is_full() {
            return Err(EngineError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = Some(transition);
        self.len += 1;
        Ok(())
    }

    /// Remove the first entry for `transition`, keeping the rest in order.
    pub(crate) fn remove(&mut self, transition: &Transition) -> Result<(), EngineError> {
        let index = self.position(transition).ok_or(EngineError::NotFound)?;
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = None;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear(None);
        self.len = 0;
    }

    fn position(&self, transition: &Transition) -> Option<usize> {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.is_some_and(|registered| registered.same(transition)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry<'t, 'b>(capacity: usize) -> TransitionRegistry<'t, 'b> {
        TransitionRegistry::new(Buffer::allocate("registry", capacity, None).unwrap())
    }

    #[test]
    fn insert_up_to_capacity_then_fail() {
        let a = Transition::new(0, 1);
        let b = Transition::new(1, 2);
        let c = Transition::new(2, 0);
        let mut reg = registry(2);

        reg.insert(&a).unwrap();
        reg.insert(&b).unwrap();
        assert!(reg.is_full());

        assert_eq!(
            reg.insert(&c),
            Err(EngineError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(reg.len(), 2);
        assert!(!reg.contains(&c));
    }

    #[test]
    fn remove_keeps_relative_order() {
        let a = Transition::new(0, 1);
        let b = Transition::new(1, 2);
        let c = Transition::new(2, 3);
        let mut reg = registry(3);
        for t in [&a, &b, &c] {
            reg.insert(t).unwrap();
        }

        reg.remove(&b).unwrap();

        let remaining: Vec<_> = reg.iter().collect();
        assert_eq!(remaining.len(), 2);
        assert!(remaining[0].same(&a));
        assert!(remaining[1].same(&c));
    }

    #[test]
    fn remove_unknown_is_not_found_and_changes_nothing() {
        let a = Transition::new(0, 1);
        let twin = Transition::new(0, 1);
        let mut reg = registry(2);
        reg.insert(&a).unwrap();

        assert_eq!(reg.remove(&twin), Err(EngineError::NotFound));
        assert_eq!(reg.len(), 1);
        assert!(reg.contains(&a));
    }

    #[test]
    fn freed_slot_is_reusable() {
        let a = Transition::new(0, 1);
        let b = Transition::new(1, 2);
        let mut reg = registry(1);

        reg.insert(&a).unwrap();
        reg.remove(&a).unwrap();
        assert!(reg.is_empty());

        reg.insert(&b).unwrap();
        assert!(reg.contains(&b));
    }

    #[test]
    fn borrowed_slots_are_reset_on_construction() {
        let stale = Transition::new(7, 7);
        let mut backing = [Some(&stale), Some(&stale)];

        let reg = TransitionRegistry::new(Buffer::Borrowed(&mut backing[..]));
        assert!(reg.is_empty());
        assert_eq!(reg.capacity(), 2);
        assert!(!reg.owns_storage());
        assert_eq!(reg.iter().count(), 0);
    }
}
