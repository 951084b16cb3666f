//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! A container such as `Vec<_>` or `UnrolledList<_>` is a type constructor:
//! given an element type it produces a concrete type. Rust cannot abstract
//! over `Vec<_>` directly, so [`TypeConstructor`] records the element type as
//! `Inner` and the "same container, other element" type as `WithType<B>`.
//!
//! # Example
//!
//! ```rust
//! use unrolled_list::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Vec<i32> = vec![1, 2, 3];
//! let strings: Vec<String> = rebuild(numbers);
//! assert!(strings.is_empty());
//! ```

/// A trait for emulating higher-kinded types.
///
/// # Type Parameters
///
/// - `Inner`: the element type held by the container
/// - `WithType<B>`: the same container holding `B` instead
pub trait TypeConstructor {
    /// The element type held by this container.
    type Inner;

    /// The same container with its element type replaced by `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
