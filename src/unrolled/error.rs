//! Error types for the unrolled list.
//!
//! Every fallible operation checks its arguments before touching the chain,
//! so a returned error always means the list is unchanged.

use super::MIN_NODE_CAPACITY;

/// Represents errors that can occur when operating on an [`UnrolledList`].
///
/// [`UnrolledList`]: super::UnrolledList
///
/// # Examples
///
/// ```rust
/// use unrolled_list::unrolled::{UnrolledList, UnrolledListError};
///
/// let mut list: UnrolledList<i32> = UnrolledList::new();
/// let error = list.insert(3, 42).unwrap_err();
/// assert_eq!(error, UnrolledListError::IndexOutOfRange { index: 3, size: 0 });
/// assert_eq!(format!("{error}"), "index 3 out of range for list of size 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnrolledListError {
    /// The index does not address an element (or, for insertion, a gap).
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The size of the list at the time of the call.
        size: usize,
    },
    /// The requested node capacity cannot hold a split.
    InvalidNodeCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}

impl std::fmt::Display for UnrolledListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(formatter, "index {index} out of range for list of size {size}")
            }
            Self::InvalidNodeCapacity { capacity } => write!(
                formatter,
                "node capacity {capacity} is below the minimum of {MIN_NODE_CAPACITY}"
            ),
        }
    }
}

impl std::error::Error for UnrolledListError {}
