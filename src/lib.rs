//! Positional linked containers over a generational slot arena.
//!
//! Two containers share one sentinel-bounded doubly linked chain:
//!
//! ```text
//! Arena (generational slots)  - owns the nodes, detects stale handles
//! Chain (header .. trailer)   - raw splice/unsplice primitives
//! LinkedDeque                 - element access at both ends only
//! PositionalList              - stable Position handles into the middle
//! ```
//!
//! The positional list is the interesting one: a [`Position`] keeps
//! referring to its element no matter what is inserted or deleted
//! elsewhere in the list, and goes stale exactly when its own element is
//! deleted. Stale and cross-container handles are detected, not
//! undefined: every operation taking a position validates it against the
//! owning list and the node's generation first.
//!
//! # Quick Start
//!
//! ```
//! use chainlist::PositionalList;
//!
//! let mut list = PositionalList::new();
//! let p1 = list.add_last("b");
//! list.add_before(p1, "a")?;
//! let p2 = list.add_after(p1, "c")?;
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//!
//! // p1 survives the surrounding mutation until it is deleted itself.
//! assert_eq!(list.delete(p1)?, "b");
//! assert!(list.get(p1).is_err());
//! assert_eq!(list.get(p2)?, &"c");
//! # Ok::<(), chainlist::InvalidPosition>(())
//! ```
//!
//! # Containers
//!
//! | Container | Access | Empty-container policy |
//! |-----------|--------|------------------------|
//! | [`LinkedDeque`] | both ends, elements only | `first`/`last`/`delete_*` fail with [`Empty`] |
//! | [`PositionalList`] | any slot via [`Position`] | `first`/`last` return `None`, never an error |
//!
//! # Error Taxonomy
//!
//! Two kinds, nothing else:
//!
//! - [`Empty`] - access or removal on a container with no elements.
//!   Recoverable; check `is_empty()` or branch on the `Err`.
//! - [`InvalidPosition`] - a position used after deletion
//!   ([`InvalidPosition::Dangling`]) or against a list that did not
//!   create it ([`InvalidPosition::Foreign`]). A usage error; propagate,
//!   don't retry.
//!
//! Operations are atomic: they either complete fully or fail before
//! mutating state.
//!
//! # Concurrency
//!
//! Single-threaded by design. Relinking is not atomic, so sharing a
//! container across threads requires external serialization (one
//! exclusive lock around the whole container).
//!
//! # Sorting
//!
//! [`pq_sort`], [`quick_sort`], and [`quick_sort_in_place`] are written
//! purely against the public contracts above; see [`sort`].

#![warn(missing_docs)]

mod arena;
mod chain;

pub mod deque;
pub mod error;
pub mod positional;
pub mod sort;

pub use deque::LinkedDeque;
pub use error::{Empty, InvalidPosition};
pub use positional::{Iter, Position, PositionalList};
pub use sort::{pq_sort, quick_sort, quick_sort_in_place};
