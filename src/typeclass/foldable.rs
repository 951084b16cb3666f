//! Foldable type class - folding a structure into a summary value.
//!
//! # Examples
//!
//! ```rust
//! use unrolled_list::typeclass::Foldable;
//!
//! let values = vec![1, 2, 3, 4, 5];
//!
//! let sum = values.clone().fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! // fold_map with the String monoid
//! let joined: String = values.fold_map(|element| element.to_string());
//! assert_eq!(joined, "12345");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// `fold_left` walks elements front to back, `fold_right` back to front. The
/// remaining methods are derived from `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds from the front.
    ///
    /// # Arguments
    ///
    /// * `init` - Initial accumulator, returned unchanged for an empty structure
    /// * `function` - Combines the accumulator with the next element
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::typeclass::Foldable;
    ///
    /// let digits = vec![1, 2, 3];
    /// let text = digits.fold_right(String::new(), |element, accumulator| {
    ///     accumulator + &element.to_string()
    /// });
    /// assert_eq!(text, "321");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results in order.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    /// Optimized implementation for Vec.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    /// Optimized implementation for Vec - returns self.
    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_fold_left_sums() {
        assert_eq!(vec![1, 2, 3].fold_left(0, |accumulator, x| accumulator + x), 6);
    }

    #[rstest]
    fn vec_fold_left_empty_returns_init() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.fold_left(42, |accumulator, x| accumulator + x), 42);
    }

    #[rstest]
    fn vec_fold_right_visits_back_to_front() {
        let visited = vec![1, 2, 3].fold_right(Vec::new(), |x, mut accumulator| {
            accumulator.push(x);
            accumulator
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn vec_fold_map_concatenates_strings() {
        let joined: String = vec!['a', 'b', 'c'].fold_map(String::from);
        assert_eq!(joined, "abc");
    }

    #[rstest]
    #[case(vec![1, 2, 3], Some(2))]
    #[case(vec![1, 3, 5], None)]
    #[case(vec![], None)]
    fn vec_find_first_even(#[case] values: Vec<i32>, #[case] expected: Option<i32>) {
        assert_eq!(values.find(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn vec_exists_and_for_all() {
        let values = vec![2, 4, 6];
        assert!(values.exists(|x| *x == 4));
        assert!(values.for_all(|x| x % 2 == 0));
        assert!(!values.for_all(|x| *x > 2));
    }
}
