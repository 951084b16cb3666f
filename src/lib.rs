//! # unrolled-list
//!
//! An unrolled linked list: a sequence container that stores its elements in
//! a chain of fixed-capacity nodes instead of one element per node.
//!
//! ## Overview
//!
//! Every node holds a small, front-packed block of slots. Walking the chain
//! touches one node per block rather than one per element, so index lookups
//! cost O(n / C) hops for node capacity `C` and scans stay cache friendly.
//!
//! - **Unrolled list**: [`UnrolledList`](unrolled::UnrolledList) with
//!   split-on-insert and merge-on-remove node management
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid` over the
//!   list and over plain `Vec` sequences
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable, etc.)
//! - `unrolled`: The unrolled linked list
//! - `serde`: Serialization of lists as plain sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use unrolled_list::prelude::*;
//!
//! let mut list: UnrolledList<i32> = (1..=12).collect();
//! assert_eq!(list.len(), 12);
//! assert_eq!(list.node_count(), 3);
//!
//! list.remove(0).unwrap();
//! assert_eq!(list.get(0), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use unrolled_list::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "unrolled")]
    pub use crate::unrolled::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "unrolled")]
pub mod unrolled;
