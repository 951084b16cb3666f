//! Unrolled linked list.
//!
//! This module provides [`UnrolledList`], a mutable sequence that stores its
//! elements in a singly linked chain of fixed-capacity blocks.
//!
//! # Layout
//!
//! ```text
//! capacity 5, elements 1..=12 appended in order:
//!
//! [1 2 3 4 5] -> [6 7 8 9 10] -> [11 12 _ _ _]
//! ```
//!
//! Inserting into a full node splits it: the upper half of its block moves
//! into a new successor. Removing an element merges the successor back in
//! whenever both blocks fit in one node. Nodes therefore stay at least half
//! full on average and an index walk visits O(n / capacity) nodes.
//!
//! # Examples
//!
//! ```rust
//! use unrolled_list::unrolled::UnrolledList;
//!
//! let mut list = UnrolledList::new();
//! list.push('a');
//! list.push('c');
//! list.insert(1, 'b').unwrap();
//! assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
//!
//! assert_eq!(list.remove(0), Ok('a'));
//! assert_eq!(list.index_of(&'c'), Some(1));
//! ```

mod error;
mod iter;
mod list;
mod node;
pub mod sequence;

pub use error::UnrolledListError;
pub use iter::{IntoIter, Iter, IterMut, Snapshot};
pub use list::UnrolledList;

/// Node capacity used by [`UnrolledList::new`].
pub const DEFAULT_NODE_CAPACITY: usize = 5;

/// Smallest node capacity accepted by [`UnrolledList::with_node_capacity`].
///
/// A one-slot node cannot be split into two nodes that both have room left.
pub const MIN_NODE_CAPACITY: usize = 2;
