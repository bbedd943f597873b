//! Generational slot arena backing the linked containers.
//!
//! Slots are reused LIFO through a free stack. Every slot carries a
//! generation counter that is bumped on removal, so a stale [`SlotId`]
//! held across a remove-and-reuse cycle misses on lookup instead of
//! silently resolving to the new occupant.

/// Stable handle to one occupied arena slot.
///
/// Lookups fail once the slot's generation has moved past the one
/// recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Growable arena with stable indices and O(1) insert/remove/get.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value, returning its generation-tagged id.
    pub(crate) fn insert(&mut self, value: T) -> SlotId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.value.is_none());
                slot.value = Some(value);
                SlotId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                SlotId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Removes and returns the value at `id`, if the id is still live.
    ///
    /// Bumps the slot's generation so outstanding copies of `id` go stale.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.value.is_none() {
            return None;
        }

        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        slot.value.take()
    }

    /// Returns a reference to the value at `id`, if the id is still live.
    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Returns `true` if `id` still names a live slot.
    #[inline]
    pub(crate) fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Re-tags a raw slot index with its current generation.
    ///
    /// The slot must be occupied; this is how the chain turns a raw link
    /// back into a checkable id.
    #[inline]
    pub(crate) fn id_at(&self, index: u32) -> SlotId {
        let slot = &self.slots[index as usize];
        debug_assert!(slot.value.is_some());
        SlotId {
            index,
            generation: slot.generation,
        }
    }

    /// Returns a reference to the occupant of a raw slot index.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant. Callers pass indices taken from live
    /// links, which always name occupied slots.
    #[inline]
    pub(crate) fn index(&self, index: u32) -> &T {
        self.slots[index as usize]
            .value
            .as_ref()
            .expect("vacant slot behind a live link")
    }

    /// Mutable variant of [`Arena::index`].
    #[inline]
    pub(crate) fn index_mut(&mut self, index: u32) -> &mut T {
        self.slots[index as usize]
            .value
            .as_mut()
            .expect("vacant slot behind a live link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let id = arena.insert(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(id), Some(&42));

        assert_eq!(arena.remove(id), Some(42));
        assert_eq!(arena.get(id), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let _b = arena.insert(2);
        arena.remove(a);

        let c = arena.insert(3);
        assert_eq!(c.index, a.index);
    }

    #[test]
    fn stale_id_misses_after_reuse() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        arena.remove(a);
        let b = arena.insert(2);

        // Same slot, new generation: the old id must not see the new value.
        assert_eq!(b.index, a.index);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let id = arena.insert(7);
        assert_eq!(arena.remove(id), Some(7));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn id_at_matches_current_generation() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        arena.remove(a);
        let b = arena.insert(2);

        assert_eq!(arena.id_at(b.index), b);
        assert_ne!(arena.id_at(b.index), a);
    }
}
