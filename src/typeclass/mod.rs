//! Type class traits for sequence abstractions.
//!
//! This module provides the algebraic traits the sequence operations of this
//! crate are expressed through:
//!
//! - [`Functor`]: Mapping over every element of a sequence
//! - [`Foldable`]: Folding a sequence into a summary value
//! - [`Semigroup`]: Associative binary operations (sequence concatenation)
//! - [`Monoid`]: Semigroup with identity element (the empty sequence)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that
//! `Functor::fmap` can change the element type of a container while keeping
//! the container itself.
//!
//! # Examples
//!
//! ## Concatenating sequences
//!
//! ```rust
//! use unrolled_list::typeclass::{Monoid, Semigroup};
//!
//! let first = vec![1, 2];
//! let second = vec![3, 4];
//! assert_eq!(first.combine(second), vec![1, 2, 3, 4]);
//!
//! // The empty sequence is the identity element
//! assert_eq!(Vec::<i32>::empty().combine(vec![5]), vec![5]);
//! ```
//!
//! ## Folding
//!
//! ```rust
//! use unrolled_list::typeclass::Foldable;
//!
//! let values = vec![1, 2, 3, 4, 5];
//! assert_eq!(values.fold_left(0, |accumulator, element| accumulator + element), 15);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
