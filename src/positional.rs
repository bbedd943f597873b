//! Positional list: a sequence whose elements are addressed by stable
//! position handles.
//!
//! A [`Position`] stays valid across insertions and deletions elsewhere
//! in the list and goes stale exactly when its own node is deleted. This
//! is the defining guarantee that distinguishes the positional list from
//! index-based access, where every mutation shifts later indices.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::arena::SlotId;
use crate::chain::Chain;
use crate::error::InvalidPosition;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque handle to one element slot of a [`PositionalList`].
///
/// A position binds the identity of the list that created it and a
/// generation-tagged reference to one node. Two positions compare equal
/// iff they reference the same node in the same list; payloads are never
/// compared.
///
/// Copying a position is free; all copies go stale together when the
/// node is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    list: u64,
    node: SlotId,
}

/// A sequential container of elements addressable by [`Position`].
///
/// All position-relative mutators are O(1). Every operation taking a
/// position validates it first: a position from another list fails with
/// [`InvalidPosition::Foreign`], a deleted one with
/// [`InvalidPosition::Dangling`].
///
/// # Example
///
/// ```
/// use chainlist::PositionalList;
///
/// let mut list = PositionalList::new();
/// let p1 = list.add_last(10);
/// let p2 = list.add_last(20);
/// let p3 = list.add_before(p2, 15)?;
///
/// let values: Vec<_> = list.iter().copied().collect();
/// assert_eq!(values, vec![10, 15, 20]);
///
/// assert_eq!(list.delete(p3)?, 15);
/// assert!(list.after(p3).is_err()); // p3 is stale now
/// assert_eq!(list.get(p1)?, &10);   // p1 is untouched
/// # Ok::<(), chainlist::InvalidPosition>(())
/// ```
#[derive(Debug)]
pub struct PositionalList<T> {
    chain: Chain<T>,
    id: u64,
}

impl<T> PositionalList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Creates an empty list with room for `capacity` elements before
    /// the backing arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Resolves a position to its node, or reports why it is invalid.
    fn validate(&self, p: Position) -> Result<SlotId, InvalidPosition> {
        if p.list != self.id {
            return Err(InvalidPosition::Foreign);
        }
        if !self.chain.contains(p.node) {
            return Err(InvalidPosition::Dangling);
        }
        Ok(p.node)
    }

    /// Wraps a raw node index, or `None` for a sentinel.
    fn make_position(&self, index: u32) -> Option<Position> {
        if self.chain.is_sentinel(index) {
            return None;
        }
        Some(Position {
            list: self.id,
            node: self.chain.id_at(index),
        })
    }

    /// Returns the first position, or `None` if the list is empty.
    pub fn first(&self) -> Option<Position> {
        self.make_position(self.chain.first_index())
    }

    /// Returns the last position, or `None` if the list is empty.
    pub fn last(&self) -> Option<Position> {
        self.make_position(self.chain.last_index())
    }

    /// Returns the position just before `p`, or `Ok(None)` if `p` is first.
    pub fn before(&self, p: Position) -> Result<Option<Position>, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self.make_position(self.chain.node(node.index).prev))
    }

    /// Returns the position just after `p`, or `Ok(None)` if `p` is last.
    pub fn after(&self, p: Position) -> Result<Option<Position>, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self.make_position(self.chain.node(node.index).next))
    }

    /// Borrows the element at `p`.
    pub fn get(&self, p: Position) -> Result<&T, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .node(node.index)
            .element
            .as_ref()
            .expect("validated node holds an element"))
    }

    /// Mutably borrows the element at `p`.
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .node_mut(node.index)
            .element
            .as_mut()
            .expect("validated node holds an element"))
    }

    fn insert_between(&mut self, element: T, pred: u32, succ: u32) -> Position {
        let node = self.chain.insert_between(element, pred, succ);
        Position {
            list: self.id,
            node,
        }
    }

    /// Inserts an element at the front and returns its position.
    pub fn add_first(&mut self, element: T) -> Position {
        let header = self.chain.header();
        let succ = self.chain.node(header).next;
        self.insert_between(element, header, succ)
    }

    /// Inserts an element at the back and returns its position.
    pub fn add_last(&mut self, element: T) -> Position {
        let trailer = self.chain.trailer();
        let pred = self.chain.node(trailer).prev;
        self.insert_between(element, pred, trailer)
    }

    /// Inserts an element just before `p` and returns its position.
    pub fn add_before(&mut self, p: Position, element: T) -> Result<Position, InvalidPosition> {
        let node = self.validate(p)?;
        let pred = self.chain.node(node.index).prev;
        Ok(self.insert_between(element, pred, node.index))
    }

    /// Inserts an element just after `p` and returns its position.
    pub fn add_after(&mut self, p: Position, element: T) -> Result<Position, InvalidPosition> {
        let node = self.validate(p)?;
        let succ = self.chain.node(node.index).next;
        Ok(self.insert_between(element, node.index, succ))
    }

    /// Removes and returns the element at `p`, invalidating `p`.
    pub fn delete(&mut self, p: Position) -> Result<T, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self.chain.delete_node(node))
    }

    /// Replaces the element at `p`, returning the previous element.
    ///
    /// `p` remains valid: same node, new payload.
    pub fn replace(&mut self, p: Position, element: T) -> Result<T, InvalidPosition> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .node_mut(node.index)
            .element
            .replace(element)
            .expect("validated node holds an element"))
    }

    /// Returns a forward iterator over the elements.
    ///
    /// The iteration is lazy and restartable: each call starts at the
    /// current first element. Mutating the list while an iterator is
    /// alive is prevented by the borrow it holds.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: &self.chain,
            cursor: self.chain.first_index(),
        }
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for element in iter {
            list.add_last(element);
        }
        list
    }
}

/// Forward iterator over list elements.
#[derive(Debug)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cursor: u32,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.chain.trailer() {
            return None;
        }
        let node = self.chain.node(self.cursor);
        self.cursor = node.next;
        node.element.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
