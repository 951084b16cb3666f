//! Functor type class - mapping over every element of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose elements can be transformed one by one.
///
/// The containers in this crate hold many elements, so the mapping function
/// is `FnMut` and is called once per element, in sequence order.
///
/// # Examples
///
/// ```rust
/// use unrolled_list::typeclass::Functor;
///
/// let numbers = vec![1, 2, 3];
/// let strings: Vec<String> = numbers.fmap(|n| n.to_string());
/// assert_eq!(strings, vec!["1", "2", "3"]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, consuming the container.
    ///
    /// # Arguments
    ///
    /// * `function` - Called once per element, front to back
    ///
    /// # Returns
    ///
    /// A container of the same shape holding the transformed elements
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to a reference of every element.
    ///
    /// The original container stays available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::typeclass::Functor;
    ///
    /// let words = vec!["a".to_string(), "bcd".to_string()];
    /// let lengths: Vec<usize> = words.fmap_ref(String::len);
    /// assert_eq!(lengths, vec![1, 3]);
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace('x'), vec!['x', 'x']);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
