//! Sentinel-bounded doubly linked chain over the slot arena.
//!
//! Two permanent sentinel slots (header and trailer) are allocated at
//! construction and never exposed or freed. Real nodes are strung between
//! them, so insertion and deletion never branch on empty-list or boundary
//! cases.
//!
//! This layer is intentionally unchecked: argument validity is the
//! caller's responsibility, enforced by the public containers on top.

use crate::arena::{Arena, SlotId};

/// One chain node. Sentinels hold `element: None`; real nodes hold `Some`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: Option<T>,
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

/// The sentinel-bounded chain plus a count of real nodes.
///
/// Links are raw slot indices; they always point at occupied slots
/// (sentinels included), so traversal needs no generation checks.
/// Generation-tagged [`SlotId`]s come into play only at the positional
/// layer, where handles outlive mutations.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    arena: Arena<Node<T>>,
    header: u32,
    trailer: u32,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self::with_arena(Arena::new())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        // Two extra slots for the sentinels.
        Self::with_arena(Arena::with_capacity(capacity + 2))
    }

    fn with_arena(mut arena: Arena<Node<T>>) -> Self {
        let header = arena
            .insert(Node {
                element: None,
                prev: 0,
                next: 0,
            })
            .index;
        let trailer = arena
            .insert(Node {
                element: None,
                prev: header,
                next: header,
            })
            .index;
        arena.index_mut(header).next = trailer;
        arena.index_mut(header).prev = trailer;

        Self {
            arena,
            header,
            trailer,
            len: 0,
        }
    }

    /// Number of real (non-sentinel) nodes.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn header(&self) -> u32 {
        self.header
    }

    #[inline]
    pub(crate) const fn trailer(&self) -> u32 {
        self.trailer
    }

    #[inline]
    pub(crate) fn is_sentinel(&self, index: u32) -> bool {
        index == self.header || index == self.trailer
    }

    /// Borrows the node behind a live link.
    #[inline]
    pub(crate) fn node(&self, index: u32) -> &Node<T> {
        self.arena.index(index)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: u32) -> &mut Node<T> {
        self.arena.index_mut(index)
    }

    /// Re-tags a raw link with its current generation.
    #[inline]
    pub(crate) fn id_at(&self, index: u32) -> SlotId {
        self.arena.id_at(index)
    }

    /// Returns `true` if `id` still names a live node of this chain.
    #[inline]
    pub(crate) fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Splices a new node holding `element` between two adjacent nodes.
    ///
    /// Infallible: the arena grows on demand.
    pub(crate) fn insert_between(&mut self, element: T, pred: u32, succ: u32) -> SlotId {
        debug_assert_eq!(self.node(pred).next, succ, "nodes must be adjacent");
        debug_assert_eq!(self.node(succ).prev, pred, "nodes must be adjacent");

        let id = self.arena.insert(Node {
            element: Some(element),
            prev: pred,
            next: succ,
        });
        self.arena.index_mut(pred).next = id.index;
        self.arena.index_mut(succ).prev = id.index;
        self.len += 1;
        id
    }

    /// Unlinks a real node, retires its slot, and returns its element.
    ///
    /// Retiring the slot bumps its generation, so any outstanding id for
    /// this node goes stale rather than resolving to a later occupant.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale or names a sentinel. The containers on top
    /// validate before calling down.
    pub(crate) fn delete_node(&mut self, id: SlotId) -> T {
        debug_assert!(!self.is_sentinel(id.index));

        let node = self.arena.remove(id).expect("stale node id");
        self.arena.index_mut(node.prev).next = node.next;
        self.arena.index_mut(node.next).prev = node.prev;
        self.len -= 1;
        debug_assert_eq!(self.arena.len(), self.len + 2);
        node.element.expect("sentinel passed to delete_node")
    }

    /// Index of the first real node, or the trailer when empty.
    #[inline]
    pub(crate) fn first_index(&self) -> u32 {
        self.node(self.header).next
    }

    /// Index of the last real node, or the header when empty.
    #[inline]
    pub(crate) fn last_index(&self) -> u32 {
        self.node(self.trailer).prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(values: &[u64]) -> Chain<u64> {
        let mut chain = Chain::new();
        for &v in values {
            let trailer = chain.trailer();
            let pred = chain.node(trailer).prev;
            chain.insert_between(v, pred, trailer);
        }
        chain
    }

    fn forward(chain: &Chain<u64>) -> Vec<u64> {
        let mut out = Vec::new();
        let mut cursor = chain.first_index();
        while cursor != chain.trailer() {
            let node = chain.node(cursor);
            out.push(node.element.unwrap());
            cursor = node.next;
        }
        out
    }

    fn backward(chain: &Chain<u64>) -> Vec<u64> {
        let mut out = Vec::new();
        let mut cursor = chain.last_index();
        while cursor != chain.header() {
            let node = chain.node(cursor);
            out.push(node.element.unwrap());
            cursor = node.prev;
        }
        out
    }

    #[test]
    fn empty_chain_links_sentinels_to_each_other() {
        let chain: Chain<u64> = Chain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.first_index(), chain.trailer());
        assert_eq!(chain.last_index(), chain.header());
    }

    #[test]
    fn insert_between_ends() {
        let chain = chain_of(&[1, 2, 3]);

        assert_eq!(chain.len(), 3);
        assert_eq!(forward(&chain), vec![1, 2, 3]);
    }

    #[test]
    fn forward_and_backward_agree() {
        let chain = chain_of(&[10, 20, 30, 40]);

        let mut reversed = backward(&chain);
        reversed.reverse();
        assert_eq!(forward(&chain), reversed);
    }

    #[test]
    fn insert_in_middle() {
        let mut chain = chain_of(&[1, 3]);

        let first = chain.first_index();
        let second = chain.node(first).next;
        chain.insert_between(2, first, second);

        assert_eq!(forward(&chain), vec![1, 2, 3]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn delete_relinks_neighbors() {
        let mut chain = chain_of(&[1, 2, 3]);

        let middle = chain.node(chain.first_index()).next;
        let id = chain.id_at(middle);
        assert_eq!(chain.delete_node(id), 2);

        assert_eq!(chain.len(), 2);
        assert_eq!(forward(&chain), vec![1, 3]);
        let mut reversed = backward(&chain);
        reversed.reverse();
        assert_eq!(forward(&chain), reversed);
    }

    #[test]
    fn deleted_id_goes_stale() {
        let mut chain = chain_of(&[5]);

        let id = chain.id_at(chain.first_index());
        assert!(chain.contains(id));
        chain.delete_node(id);
        assert!(!chain.contains(id));
    }

    #[test]
    fn delete_to_empty_restores_sentinel_wiring() {
        let mut chain = chain_of(&[9]);

        let id = chain.id_at(chain.first_index());
        chain.delete_node(id);

        assert!(chain.is_empty());
        assert_eq!(chain.first_index(), chain.trailer());
        assert_eq!(chain.last_index(), chain.header());
    }
}
