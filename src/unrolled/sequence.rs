//! Plain-sequence operations.
//!
//! These work on materialized sequences (`Vec<T>`, as returned by
//! [`UnrolledList::to_vec`](super::UnrolledList::to_vec)) rather than on lists.
//! They are the `Monoid` structure of `Vec`: [`empty`] is the identity element
//! and [`concat`] the associative operation.
//!
//! # Examples
//!
//! ```rust
//! use unrolled_list::unrolled::{sequence, UnrolledList};
//!
//! let first: UnrolledList<i32> = (1..=2).collect();
//! let second: UnrolledList<i32> = (3..=4).collect();
//!
//! let joined = sequence::concat(first.to_vec(), second.to_vec());
//! assert_eq!(joined, vec![1, 2, 3, 4]);
//! assert_eq!(sequence::concat(joined.clone(), sequence::empty()), joined);
//! ```

use crate::typeclass::{Monoid, Semigroup};

/// Returns the empty sequence, the identity element of [`concat`].
#[inline]
#[must_use]
pub fn empty<T: Clone>() -> Vec<T> {
    Vec::empty()
}

/// Returns `first` followed by `second`.
#[inline]
#[must_use]
pub fn concat<T: Clone>(first: Vec<T>, second: Vec<T>) -> Vec<T> {
    first.combine(second)
}
