//! Sorting routines written against the public container contracts.
//!
//! [`pq_sort`] consumes nothing beyond `len`, `first`, `delete`, and
//! `add_last` of the positional list; [`quick_sort`] consumes the FIFO
//! view of the deque (`insert_last` / `delete_first` / `first`). Neither
//! reaches into container internals.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::deque::LinkedDeque;
use crate::positional::PositionalList;

/// Sorts a positional list ascending via a min-priority-queue.
///
/// Drains the list front-to-back into a heap, then re-appends elements
/// in non-decreasing order. The list ends with the same length and the
/// same multiset of elements.
///
/// # Example
///
/// ```
/// use chainlist::{pq_sort, PositionalList};
///
/// let mut list: PositionalList<u64> = [3, 1, 2].into_iter().collect();
/// pq_sort(&mut list);
/// let sorted: Vec<_> = list.iter().copied().collect();
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn pq_sort<T: Ord>(list: &mut PositionalList<T>) {
    let mut heap = BinaryHeap::with_capacity(list.len());
    while let Some(p) = list.first() {
        let element = list.delete(p).expect("first() yields a live position");
        heap.push(Reverse(element));
    }
    while let Some(Reverse(element)) = heap.pop() {
        list.add_last(element);
    }
}

/// Sorts a deque ascending using the queue-based quick-sort.
///
/// Treats the deque as a FIFO queue: the front element is the pivot,
/// the remainder is partitioned into less/equal/greater queues, the
/// outer two are sorted recursively, and the three are concatenated
/// back in order.
///
/// # Example
///
/// ```
/// use chainlist::{quick_sort, LinkedDeque};
///
/// let mut deque: LinkedDeque<u64> = [5, 2, 4, 2].into_iter().collect();
/// quick_sort(&mut deque);
///
/// assert_eq!(deque.delete_first(), Ok(2));
/// assert_eq!(deque.delete_first(), Ok(2));
/// assert_eq!(deque.delete_first(), Ok(4));
/// assert_eq!(deque.delete_first(), Ok(5));
/// ```
pub fn quick_sort<T: Ord>(queue: &mut LinkedDeque<T>) {
    if queue.len() < 2 {
        return;
    }

    let pivot = queue.delete_first().expect("len checked above");
    let mut less = LinkedDeque::new();
    let mut equal = LinkedDeque::new();
    let mut greater = LinkedDeque::new();
    equal.insert_last(pivot);

    while let Ok(element) = queue.delete_first() {
        let ord = element.cmp(equal.first().expect("pivot enqueued"));
        let bucket = match ord {
            Ordering::Less => &mut less,
            Ordering::Equal => &mut equal,
            Ordering::Greater => &mut greater,
        };
        bucket.insert_last(element);
    }

    quick_sort(&mut less);
    quick_sort(&mut greater);

    for bucket in [&mut less, &mut equal, &mut greater] {
        while let Ok(element) = bucket.delete_first() {
            queue.insert_last(element);
        }
    }
}

/// Sorts a slice ascending in place with quick-sort.
///
/// Last element of each range is the pivot; recursion depth is bounded
/// by the partition sizes, so pathological inputs degrade to O(n^2)
/// time like the textbook algorithm.
pub fn quick_sort_in_place<T: Ord>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let pivot_at = partition(items);
    let (left, right) = items.split_at_mut(pivot_at);
    quick_sort_in_place(left);
    quick_sort_in_place(&mut right[1..]);
}

/// Partitions around the last element, returning the pivot's final index.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if items[i] < items[last] {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
