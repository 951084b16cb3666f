//! Iterators over an [`UnrolledList`](super::UnrolledList).
//!
//! - [`Iter`]: borrows the list and scans it block by block
//! - [`IterMut`]: the same walk yielding mutable references
//! - [`IntoIter`]: drains the list, releasing nodes as it goes
//! - [`Snapshot`]: an owned copy of the contents, detached from the list

use std::iter::FusedIterator;

use super::node::{self, Node};

// =============================================================================
// Iter
// =============================================================================

/// An iterator over references to the elements of an unrolled list.
///
/// The list cannot be mutated while the iterator is alive, so the elements
/// seen are exactly the contents at the moment the iterator was created.
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: &'a Node<T>, length: usize) -> Self {
        Self {
            slots: head.occupied_slots().iter(),
            next: head.next.as_deref(),
            remaining: length,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.slots.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return slot.as_ref();
            }
            let node = self.next?;
            self.slots = node.occupied_slots().iter();
            self.next = node.next.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            next: self.next,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// IterMut
// =============================================================================

/// An iterator over mutable references to the elements of an unrolled list.
pub struct IterMut<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: &'a mut Node<T>, length: usize) -> Self {
        let (slots, next) = head.parts_mut();
        Self {
            slots: slots.iter_mut(),
            next,
            remaining: length,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.slots.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return slot.as_mut();
            }
            let (slots, next) = self.next.take()?.parts_mut();
            self.slots = slots.iter_mut();
            self.next = next;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator that drains an unrolled list front to back.
pub struct IntoIter<T> {
    slots: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
    next: Option<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(head: Node<T>, length: usize) -> Self {
        let (slots, next) = head.into_parts();
        Self {
            slots: slots.into_iter().flatten(),
            next,
            remaining: length,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.slots.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(element);
            }
            let node = self.next.take()?;
            let (slots, next) = (*node).into_parts();
            self.slots = slots.into_iter().flatten();
            self.next = next;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        node::drop_chain(self.next.take());
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// A detached, forward-only view of a list's contents.
///
/// A snapshot owns copies of the elements taken when it was derived, so later
/// mutation of the source list is not observed. Each snapshot advances on its
/// own; cloning one yields an independent view at the same position.
///
/// # Examples
///
/// ```rust
/// use unrolled_list::unrolled::UnrolledList;
///
/// let mut list: UnrolledList<i32> = (1..=3).collect();
/// let mut snapshot = list.snapshot();
/// list.push(4);
///
/// assert_eq!(snapshot.next(), Some(1));
/// assert_eq!(snapshot.collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }

    /// Returns the elements not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}
