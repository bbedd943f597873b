//! Double-ended queue over the sentinel-bounded chain.
//!
//! Element-level access at both ends only; no positions are exposed.
//! Restricted to one end (`insert_last` / `delete_first`) it is the FIFO
//! queue consumed by [`quick_sort`](crate::sort::quick_sort).

use crate::chain::Chain;
use crate::error::Empty;

/// A double-ended queue backed by a doubly linked chain.
///
/// All operations are O(1). Accessors and removals on an empty deque
/// fail with [`Empty`].
///
/// # Example
///
/// ```
/// use chainlist::LinkedDeque;
///
/// let mut deque = LinkedDeque::new();
/// deque.insert_first(1);
/// deque.insert_last(2);
/// deque.insert_first(0);
///
/// assert_eq!(deque.first(), Ok(&0));
/// assert_eq!(deque.last(), Ok(&2));
/// assert_eq!(deque.delete_first(), Ok(0));
/// assert_eq!(deque.len(), 2);
/// ```
#[derive(Debug)]
pub struct LinkedDeque<T> {
    chain: Chain<T>,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` elements before
    /// the backing arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub const fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns (but does not remove) the element at the front.
    pub fn first(&self) -> Result<&T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        let front = self.chain.first_index();
        Ok(self.chain.node(front).element.as_ref().expect("real node"))
    }

    /// Returns (but does not remove) the element at the back.
    pub fn last(&self) -> Result<&T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        let back = self.chain.last_index();
        Ok(self.chain.node(back).element.as_ref().expect("real node"))
    }

    /// Adds an element to the front.
    pub fn insert_first(&mut self, element: T) {
        let header = self.chain.header();
        let succ = self.chain.node(header).next;
        self.chain.insert_between(element, header, succ);
    }

    /// Adds an element to the back.
    pub fn insert_last(&mut self, element: T) {
        let trailer = self.chain.trailer();
        let pred = self.chain.node(trailer).prev;
        self.chain.insert_between(element, pred, trailer);
    }

    /// Removes and returns the element at the front.
    pub fn delete_first(&mut self) -> Result<T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        let id = self.chain.id_at(self.chain.first_index());
        Ok(self.chain.delete_node(id))
    }

    /// Removes and returns the element at the back.
    pub fn delete_last(&mut self) -> Result<T, Empty> {
        if self.is_empty() {
            return Err(Empty);
        }
        let id = self.chain.id_at(self.chain.last_index());
        Ok(self.chain.delete_node(id))
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        for element in iter {
            deque.insert_last(element);
        }
        deque
    }
}
