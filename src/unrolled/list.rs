//! The [`UnrolledList`] container.
//!
//! # Overview
//!
//! The list owns its first node directly and every further node through a
//! `Box` link. The first node always exists, so insertion at the front of an
//! empty list needs no special case; it is the only node that may be empty,
//! and only when the whole list is.
//!
//! | Operation    | Complexity           |
//! |--------------|----------------------|
//! | `len`        | O(1)                 |
//! | `get`        | O(n / C)             |
//! | `insert`     | O(n / C + C)         |
//! | `remove`     | O(n / C + C)         |
//! | `push`       | O(n / C)             |
//! | `index_of`   | O(n)                 |
//! | `to_vec`     | O(n)                 |
//! | `reverse`    | O(n)                 |
//!
//! where `C` is the node capacity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

use super::iter::{IntoIter, Iter, IterMut, Snapshot};
use super::node::{self, Node};
use super::{DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY, UnrolledListError};

/// What an index walk is looking for.
#[derive(Clone, Copy)]
enum Target {
    /// A live element: the offset must be below the node's occupancy.
    Element,
    /// An insertion point: an offset equal to the occupancy stays on the node.
    Gap,
}

impl Target {
    #[inline]
    const fn accepts(self, offset: usize, occupied: usize) -> bool {
        match self {
            Self::Element => offset < occupied,
            Self::Gap => offset <= occupied,
        }
    }
}

/// A mutable sequence stored as a chain of fixed-capacity blocks.
///
/// # Examples
///
/// ```rust
/// use unrolled_list::unrolled::UnrolledList;
///
/// let mut list: UnrolledList<i32> = (1..=12).collect();
/// assert_eq!(list.node_sizes(), vec![5, 5, 2]);
///
/// list.insert(2, 99).unwrap();
/// assert_eq!(list.get(2), Some(&99));
/// assert_eq!(list.len(), 13);
/// ```
pub struct UnrolledList<T> {
    /// The first node of the chain.
    head: Node<T>,
    /// Cached element count for O(1) access.
    length: usize,
    /// Slot count of every node in the chain.
    node_capacity: usize,
}

impl<T> UnrolledList<T> {
    /// Creates a new empty list with [`DEFAULT_NODE_CAPACITY`] slots per node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = UnrolledList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.node_capacity(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::build(DEFAULT_NODE_CAPACITY)
    }

    /// Creates a new empty list whose nodes hold `node_capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`UnrolledListError::InvalidNodeCapacity`] if `node_capacity`
    /// is below [`MIN_NODE_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::{UnrolledList, UnrolledListError};
    ///
    /// let list: UnrolledList<u8> = UnrolledList::with_node_capacity(64).unwrap();
    /// assert_eq!(list.node_capacity(), 64);
    ///
    /// let rejected = UnrolledList::<u8>::with_node_capacity(1);
    /// assert_eq!(rejected.err(), Some(UnrolledListError::InvalidNodeCapacity { capacity: 1 }));
    /// ```
    pub fn with_node_capacity(node_capacity: usize) -> Result<Self, UnrolledListError> {
        if node_capacity < MIN_NODE_CAPACITY {
            return Err(UnrolledListError::InvalidNodeCapacity {
                capacity: node_capacity,
            });
        }
        Ok(Self::build(node_capacity))
    }

    fn build(node_capacity: usize) -> Self {
        Self {
            head: Node::new(node_capacity),
            length: 0,
            node_capacity,
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of slots in each node.
    #[inline]
    #[must_use]
    pub const fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Returns the number of nodes holding at least one element.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().filter(|node| !node.is_empty()).count()
    }

    /// Returns the occupancy of every non-empty node, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32> = (1..=5).collect();
    /// assert_eq!(list.node_sizes(), vec![5]);
    ///
    /// // Inserting into the full node splits it
    /// list.insert(0, 0).unwrap();
    /// assert_eq!(list.node_sizes(), vec![3, 3]);
    /// ```
    #[must_use]
    pub fn node_sizes(&self) -> Vec<usize> {
        self.nodes()
            .map(Node::len)
            .filter(|occupied| *occupied > 0)
            .collect()
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        std::iter::successors(Some(&self.head), |node| node.next.as_deref())
    }

    /// Translates a global index into a node and an offset inside it.
    fn locate(&self, index: usize, target: Target) -> Option<(&Node<T>, usize)> {
        let mut remaining = index;
        for node in self.nodes() {
            if target.accepts(remaining, node.len()) {
                return Some((node, remaining));
            }
            remaining -= node.len();
        }
        None
    }

    /// Like [`Self::locate`], also reporting the node's position in the chain.
    fn locate_mut(&mut self, index: usize, target: Target) -> Option<(usize, &mut Node<T>, usize)> {
        let mut remaining = index;
        let mut position = 0;
        let mut cursor = Some(&mut self.head);
        while let Some(node) = cursor {
            if target.accepts(remaining, node.len()) {
                return Some((position, node, remaining));
            }
            remaining -= node.len();
            position += 1;
            cursor = node.next.as_deref_mut();
        }
        None
    }

    fn tail_mut(&mut self) -> &mut Node<T> {
        let mut tail = &mut self.head;
        loop {
            match tail.next {
                Some(ref mut next) => tail = &mut **next,
                None => return tail,
            }
        }
    }

    fn node_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut cursor = Some(&mut self.head);
        for _ in 0..position {
            cursor = cursor?.next.as_deref_mut();
        }
        cursor
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<char> = "abc".chars().collect();
    /// assert_eq!(list.get(1), Some(&'b'));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let (node, offset) = self.locate(index, Target::Element)?;
        node.get(offset)
    }

    /// Returns a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (_, node, offset) = self.locate_mut(index, Target::Element)?;
        node.get_mut(offset)
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.get(0)
    }

    /// Returns the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.length.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Inserts an element at `index`, shifting later elements back.
    ///
    /// `index` may equal [`len`](Self::len), which appends. If the node that
    /// receives the element is full it is split first.
    ///
    /// # Errors
    ///
    /// Returns [`UnrolledListError::IndexOutOfRange`] if `index > len()`.
    /// The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list = UnrolledList::new();
    /// list.insert(0, 'a').unwrap();
    /// list.insert(1, 'c').unwrap();
    /// list.insert(1, 'b').unwrap();
    /// assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    ///
    /// assert!(list.insert(5, 'z').is_err());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), UnrolledListError> {
        let out_of_range = UnrolledListError::IndexOutOfRange {
            index,
            size: self.length,
        };
        if index > self.length {
            return Err(out_of_range);
        }
        let Some((_, node, offset)) = self.locate_mut(index, Target::Gap) else {
            return Err(out_of_range);
        };
        let (target, offset) = node.make_room(offset);
        target.insert(offset, element);
        self.length += 1;
        Ok(())
    }

    /// Appends an element to the back of the list.
    ///
    /// When the tail node is full a fresh node is started, so a list built by
    /// appending keeps every node but the last one full.
    pub fn push(&mut self, element: T) {
        let tail = self.tail_mut();
        let end = tail.len();
        let (target, offset) = tail.make_room(end);
        target.insert(offset, element);
        self.length += 1;
    }

    /// Removes and returns the element at `index`.
    ///
    /// After the removal the node absorbs its successor if both fit in one
    /// node's capacity.
    ///
    /// # Errors
    ///
    /// Returns [`UnrolledListError::IndexOutOfRange`] if `index >= len()`.
    /// The list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<char> = "abc".chars().collect();
    /// assert_eq!(list.remove(2), Ok('c'));
    /// assert_eq!(list.remove(0), Ok('a'));
    /// assert_eq!(list.to_vec(), vec!['b']);
    /// assert!(list.remove(1).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, UnrolledListError> {
        let out_of_range = UnrolledListError::IndexOutOfRange {
            index,
            size: self.length,
        };
        if index >= self.length {
            return Err(out_of_range);
        }
        let Some((position, node, offset)) = self.locate_mut(index, Target::Element) else {
            return Err(out_of_range);
        };
        let Some(removed) = node.remove(offset) else {
            return Err(out_of_range);
        };
        node.absorb_next();
        // An emptied node has no successor left after the merge attempt.
        if node.is_empty()
            && position > 0
            && let Some(previous) = self.node_mut(position - 1)
        {
            previous.unlink_next();
        }
        self.length -= 1;
        Ok(removed)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`UnrolledListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32> = (1..=3).collect();
    /// assert_eq!(list.update(1, 20), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 20, 3]);
    /// ```
    pub fn update(&mut self, index: usize, element: T) -> Result<T, UnrolledListError> {
        let out_of_range = UnrolledListError::IndexOutOfRange {
            index,
            size: self.length,
        };
        let (_, node, offset) = self
            .locate_mut(index, Target::Element)
            .ok_or(out_of_range)?;
        node.replace(offset, element).ok_or(out_of_range)
    }

    /// Removes every element, keeping the node capacity.
    pub fn clear(&mut self) {
        *self = Self::build(self.node_capacity);
    }

    /// Replaces the contents of the list with `elements`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32> = (1..=3).collect();
    /// list.assign(vec![7, 8]);
    /// assert_eq!(list.to_vec(), vec![7, 8]);
    ///
    /// list.assign(Vec::new());
    /// assert!(list.is_empty());
    /// ```
    pub fn assign<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(elements);
    }

    /// Returns an iterator over references to the elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.length)
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.length)
    }

    /// Finds the index of the first element that satisfies the predicate.
    ///
    /// # Complexity
    ///
    /// O(n), scanning every node in order
    #[must_use]
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = (0..20).collect();
    /// assert_eq!(list.index_of(&17), Some(17));
    /// assert_eq!(list.index_of(&99), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_index(|element| element == value)
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// The list is rebuilt in a single pass, so the surviving elements are
    /// packed into full nodes again.
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let node_capacity = self.node_capacity;
        let drained = std::mem::replace(self, Self::build(node_capacity));
        self.extend(drained.into_iter().filter(|element| predicate(element)));
    }

    /// Applies `function` to every element in place.
    ///
    /// The node layout is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32> = (1..=3).collect();
    /// list.map_in_place(|x| x + 1);
    /// assert_eq!(list.to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn map_in_place<F>(&mut self, mut function: F)
    where
        F: FnMut(T) -> T,
    {
        let mut cursor = Some(&mut self.head);
        while let Some(node) = cursor {
            node.map_in_place(&mut function);
            cursor = node.next.as_deref_mut();
        }
    }

    /// Left-folds the elements in sequence order.
    ///
    /// Returns `initial` unchanged for an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = (1..=3).collect();
    /// assert_eq!(list.reduce(0, |state, element| state + element), 6);
    /// assert_eq!(list.reduce(0, |state, _| state + 1), list.len());
    /// ```
    pub fn reduce<B, F>(&self, initial: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, combine)
    }

    /// Consumes the list, yielding its nodes detached from one another.
    fn into_nodes(mut self) -> impl Iterator<Item = Node<T>> {
        let mut head = std::mem::replace(&mut self.head, Node::new(0));
        self.length = 0;
        let mut next = head.next.take();
        let mut pending = Some(head);
        std::iter::from_fn(move || {
            let node = pending.take()?;
            pending = next.take().map(|mut boxed| {
                next = boxed.next.take();
                *boxed
            });
            Some(node)
        })
    }
}

impl<T: Clone> UnrolledList<T> {
    /// Materializes the elements into a `Vec`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = vec![3, 1, 2].into();
    /// assert_eq!(list.to_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Derives a detached view of the current contents.
    ///
    /// See [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot::new(self.to_vec())
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// The receiver is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let list: UnrolledList<char> = "abc".chars().collect();
    /// assert_eq!(list.reverse().to_vec(), vec!['c', 'b', 'a']);
    /// assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::build(self.node_capacity);
        reversed.extend(self.to_vec().into_iter().rev());
        reversed
    }

    /// Keeps only the elements matching `predicate` and returns them.
    ///
    /// This mutates the list, like [`retain`](Self::retain).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unrolled_list::unrolled::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32> = (1..=5).collect();
    /// assert_eq!(list.filter(|x| x % 2 == 0), vec![2, 4]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn filter<P>(&mut self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(predicate);
        self.to_vec()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

impl<T> IntoIterator for UnrolledList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let length = self.length;
        let head = std::mem::replace(&mut self.head, Node::new(0));
        self.length = 0;
        IntoIter::new(head, length)
    }
}

impl<'a, T> IntoIterator for &'a UnrolledList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut UnrolledList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for UnrolledList<T> {
    fn drop(&mut self) {
        node::drop_chain(self.head.next.take());
    }
}

impl<T> Default for UnrolledList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Clones keep the node layout of the source list.
impl<T: Clone> Clone for UnrolledList<T> {
    fn clone(&self) -> Self {
        self.fmap_ref(T::clone)
    }
}

impl<T> Extend<T> for UnrolledList<T> {
    /// Walks to the tail once, then appends every element from there.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut appended = 0;
        let mut tail = self.tail_mut();
        for element in iter {
            let end = tail.len();
            let (target, offset) = tail.make_room(end);
            target.insert(offset, element);
            tail = target;
            appended += 1;
        }
        self.length += appended;
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for UnrolledList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for UnrolledList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for UnrolledList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for UnrolledList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnrolledList<T> {}

/// Hashes the length followed by every element in order, so equal lists hash
/// equally regardless of node layout.
impl<T: Hash> Hash for UnrolledList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UnrolledList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UnrolledList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(UnrolledList<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(UnrolledList<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for UnrolledList<T> {
    type Inner = T;
    type WithType<B> = UnrolledList<B>;
}

/// Mapping keeps the node layout: every node is rebuilt in place of the old
/// one with the same occupancy.
impl<T> Functor for UnrolledList<T> {
    fn fmap<B, F>(self, mut function: F) -> UnrolledList<B>
    where
        F: FnMut(T) -> B,
    {
        let node_capacity = self.node_capacity;
        let length = self.length;
        let head = node::link(
            self.into_nodes()
                .map(|node| node.map_elements(&mut function)),
            node_capacity,
        );
        UnrolledList {
            head,
            length,
            node_capacity,
        }
    }

    fn fmap_ref<B, F>(&self, mut function: F) -> UnrolledList<B>
    where
        F: FnMut(&T) -> B,
    {
        let head = node::link(
            self.nodes()
                .map(|node| node.map_elements_ref(&mut function)),
            self.node_capacity,
        );
        UnrolledList {
            head,
            length: self.length,
            node_capacity: self.node_capacity,
        }
    }
}

impl<T> Foldable for UnrolledList<T> {
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
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T> Semigroup for UnrolledList<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for UnrolledList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UnrolledList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UnrolledListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> UnrolledListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UnrolledListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = UnrolledList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = UnrolledList::new();
        while let Some(element) = seq.next_element()? {
            list.push(element);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UnrolledList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UnrolledListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Checks the bookkeeping every public operation must preserve.
    fn assert_consistent<T>(list: &UnrolledList<T>) {
        let sizes: Vec<usize> = list.nodes().map(Node::len).collect();
        assert_eq!(sizes.iter().sum::<usize>(), list.len());
        assert!(
            list.nodes()
                .all(|node| node.capacity() == list.node_capacity())
        );
        if !list.is_empty() {
            assert!(sizes.iter().all(|occupied| *occupied > 0), "{sizes:?}");
        }
    }

    fn with_capacity(capacity: usize, elements: impl IntoIterator<Item = i32>) -> UnrolledList<i32> {
        let mut list = UnrolledList::with_node_capacity(capacity).unwrap();
        list.extend(elements);
        list
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let list: UnrolledList<i32> = UnrolledList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.node_capacity(), DEFAULT_NODE_CAPACITY);
        assert_consistent(&list);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_with_node_capacity_rejects_small(#[case] capacity: usize) {
        let result = UnrolledList::<i32>::with_node_capacity(capacity);
        assert_eq!(
            result.err(),
            Some(UnrolledListError::InvalidNodeCapacity { capacity })
        );
    }

    #[rstest]
    fn test_display_and_debug() {
        let list: UnrolledList<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        let empty: UnrolledList<i32> = UnrolledList::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    // =========================================================================
    // Insert / Split Tests
    // =========================================================================

    #[rstest]
    fn test_appending_twelve_packs_three_nodes() {
        let mut list = UnrolledList::new();
        for value in 1..=12 {
            list.insert(list.len(), value).unwrap();
        }
        assert_eq!(list.to_vec(), (1..=12).collect::<Vec<_>>());
        assert_eq!(list.node_sizes(), vec![5, 5, 2]);
        assert_eq!(list.node_count(), 3);
        assert_eq!(list.len(), 12);
        assert_consistent(&list);
    }

    #[rstest]
    fn test_insert_into_full_node_splits_upper_half() {
        let mut list = with_capacity(5, 1..=5);
        list.insert(2, 99).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 99, 3, 4, 5]);
        assert_eq!(list.node_sizes(), vec![2, 4]);
        assert_consistent(&list);
    }

    #[rstest]
    fn test_insert_at_node_boundary_lands_on_earlier_node() {
        let mut list = with_capacity(4, 1..=6);
        assert_eq!(list.node_sizes(), vec![4, 2]);
        list.remove(0).unwrap();
        assert_eq!(list.node_sizes(), vec![3, 2]);
        list.insert(3, 0).unwrap();
        assert_eq!(list.node_sizes(), vec![4, 2]);
        assert_eq!(list.to_vec(), vec![2, 3, 4, 0, 5, 6]);
    }

    #[rstest]
    fn test_insert_at_front_repeatedly() {
        let mut list = UnrolledList::new();
        for value in (0..20).rev() {
            list.insert(0, value).unwrap();
            assert_consistent(&list);
        }
        assert_eq!(list.to_vec(), (0..20).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_insert_out_of_range_leaves_list_unchanged() {
        let mut list = with_capacity(3, 1..=4);
        let before = list.node_sizes();
        assert_eq!(
            list.insert(5, 0),
            Err(UnrolledListError::IndexOutOfRange { index: 5, size: 4 })
        );
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.node_sizes(), before);
    }

    #[rstest]
    fn test_minimum_capacity_supports_splits() {
        let mut list = with_capacity(2, 1..=4);
        list.insert(1, 10).unwrap();
        list.insert(0, 20).unwrap();
        assert_eq!(list.to_vec(), vec![20, 1, 10, 2, 3, 4]);
        assert_consistent(&list);
    }

    // =========================================================================
    // Remove / Merge Tests
    // =========================================================================

    #[rstest]
    fn test_remove_from_back() {
        let mut list: UnrolledList<char> = "abc".chars().collect();
        assert_eq!(list.remove(2), Ok('c'));
        assert_eq!(list.to_vec(), vec!['a', 'b']);
        assert_eq!(list.remove(1), Ok('b'));
        assert_eq!(list.to_vec(), vec!['a']);
        assert_eq!(list.remove(0), Ok('a'));
        assert!(list.to_vec().is_empty());
        assert_consistent(&list);
    }

    #[rstest]
    fn test_remove_merges_successor_when_it_fits() {
        let mut list = with_capacity(5, 1..=10);
        assert_eq!(list.node_sizes(), vec![5, 5]);
        for _ in 0..4 {
            list.remove(0).unwrap();
            assert_consistent(&list);
        }
        assert_eq!(list.node_sizes(), vec![1, 5]);
        list.remove(0).unwrap();
        assert_eq!(list.node_sizes(), vec![5]);
        assert_eq!(list.to_vec(), vec![6, 7, 8, 9, 10]);
    }

    #[rstest]
    fn test_remove_unlinks_emptied_tail() {
        let mut list = with_capacity(5, 1..=6);
        assert_eq!(list.remove(5), Ok(6));
        assert_eq!(list.node_sizes(), vec![5]);
        assert_consistent(&list);
        list.push(7);
        assert_eq!(list.node_sizes(), vec![5, 1]);
    }

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(100, false)]
    fn test_remove_checks_range(#[case] index: usize, #[case] accepted: bool) {
        let mut list = with_capacity(5, 1..=3);
        assert_eq!(list.remove(index).is_ok(), accepted);
        assert_eq!(list.len(), if accepted { 2 } else { 3 });
        assert_consistent(&list);
    }

    #[rstest]
    fn test_remove_on_empty_list() {
        let mut list: UnrolledList<i32> = UnrolledList::new();
        assert_eq!(
            list.remove(0),
            Err(UnrolledListError::IndexOutOfRange { index: 0, size: 0 })
        );
    }

    // =========================================================================
    // Access Tests
    // =========================================================================

    #[rstest]
    fn test_get_across_nodes() {
        let list = with_capacity(3, 0..10);
        for index in 0..10 {
            assert_eq!(list.get(index), Some(&i32::try_from(index).unwrap()));
        }
        assert_eq!(list.get(10), None);
    }

    #[rstest]
    fn test_get_mut_and_update() {
        let mut list = with_capacity(3, 0..5);
        if let Some(element) = list.get_mut(4) {
            *element = 40;
        }
        assert_eq!(list.update(0, -1), Ok(0));
        assert_eq!(list.to_vec(), vec![-1, 1, 2, 3, 40]);
        assert!(list.update(5, 0).is_err());
    }

    #[rstest]
    fn test_first_and_last() {
        let list = with_capacity(3, 1..=7);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&7));
        let empty: UnrolledList<i32> = UnrolledList::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[rstest]
    fn test_index_of_scans_whole_chain() {
        let list = with_capacity(2, vec![5, 6, 7, 8, 9, 7]);
        assert_eq!(list.index_of(&5), Some(0));
        assert_eq!(list.index_of(&7), Some(2));
        assert_eq!(list.index_of(&9), Some(4));
        assert_eq!(list.index_of(&1), None);
        assert!(list.contains(&8));
    }

    // =========================================================================
    // Bulk Operation Tests
    // =========================================================================

    #[rstest]
    fn test_assign_resets_contents() {
        let mut list = with_capacity(3, 1..=9);
        list.assign(vec![4, 5]);
        assert_eq!(list.to_vec(), vec![4, 5]);
        assert_eq!(list.node_capacity(), 3);
        list.assign(Vec::new());
        assert!(list.is_empty());
        assert_consistent(&list);
    }

    #[rstest]
    fn test_reverse_does_not_mutate() {
        let list = with_capacity(4, 1..=9);
        let reversed = list.reverse();
        assert_eq!(reversed.to_vec(), (1..=9).rev().collect::<Vec<_>>());
        assert_eq!(reversed.node_capacity(), 4);
        assert_eq!(list.to_vec(), (1..=9).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_filter_keeps_even() {
        let mut list: UnrolledList<i32> = (1..=5).collect();
        assert_eq!(list.filter(|x| x % 2 == 0), vec![2, 4]);
        assert_eq!(list.to_vec(), vec![2, 4]);
        assert_consistent(&list);
    }

    #[rstest]
    fn test_retain_repacks_nodes() {
        let mut list = with_capacity(4, 1..=20);
        list.retain(|x| x % 3 == 0);
        assert_eq!(list.to_vec(), vec![3, 6, 9, 12, 15, 18]);
        assert_eq!(list.node_sizes(), vec![4, 2]);
    }

    #[rstest]
    fn test_map_in_place_keeps_layout() {
        let mut list = with_capacity(5, 1..=5);
        list.insert(0, 0).unwrap();
        let layout = list.node_sizes();
        list.map_in_place(|x| x * 10);
        assert_eq!(list.to_vec(), vec![0, 10, 20, 30, 40, 50]);
        assert_eq!(list.node_sizes(), layout);
    }

    #[rstest]
    fn test_reduce() {
        let empty: UnrolledList<i32> = UnrolledList::new();
        assert_eq!(empty.reduce(7, |state, element| state + element), 7);
        let list: UnrolledList<i32> = (1..=3).collect();
        assert_eq!(list.reduce(0, |state, element| state + element), 6);
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iter_exact_size() {
        let list = with_capacity(3, 1..=8);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 8);
        iter.next();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.copied().collect::<Vec<_>>(), (2..=8).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_iter_on_empty_list_ends_immediately() {
        let list: UnrolledList<i32> = UnrolledList::new();
        let mut iter = list.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_iterators_advance_independently() {
        let first: UnrolledList<i32> = (1..=5).collect();
        let second: UnrolledList<i32> = (1..=5).collect();
        let mut iter1 = first.iter();
        let mut iter2 = second.iter();
        assert_eq!(iter1.next(), Some(&1));
        assert_eq!(iter1.next(), Some(&2));
        assert_eq!(iter2.next(), Some(&1));
        assert_eq!(iter2.next(), Some(&2));
        assert_eq!(iter1.next(), Some(&3));
    }

    #[rstest]
    fn test_iter_mut() {
        let mut list = with_capacity(2, 1..=5);
        for element in &mut list {
            *element *= 2;
        }
        assert_eq!(list.to_vec(), vec![2, 4, 6, 8, 10]);
    }

    #[rstest]
    fn test_into_iter_drains_in_order() {
        let list = with_capacity(3, 1..=7);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    fn test_snapshot_ignores_later_mutation() {
        let mut list: UnrolledList<i32> = (1..=3).collect();
        let snapshot = list.snapshot();
        list.remove(0).unwrap();
        list.push(4);
        assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_long_list_drops_without_overflow() {
        let list = with_capacity(2, 0..200_000);
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    // =========================================================================
    // Type Class Tests
    // =========================================================================

    #[rstest]
    fn test_fmap_changes_type_and_keeps_layout() {
        let mut list = with_capacity(5, 1..=5);
        list.insert(0, 0).unwrap();
        let layout = list.node_sizes();
        let strings: UnrolledList<String> = list.fmap(|x| x.to_string());
        assert_eq!(strings.to_vec(), vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(strings.node_sizes(), layout);
        assert_consistent(&strings);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = with_capacity(3, 1..=5);
        let mut copy = original.clone();
        copy.push(6);
        assert_eq!(original.len(), 5);
        assert_eq!(copy.len(), 6);
        assert_eq!(original.node_sizes(), vec![3, 2]);
    }

    #[rstest]
    fn test_fold_right() {
        let list: UnrolledList<i32> = (1..=3).collect();
        let visited = list.fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_semigroup_combine() {
        let first: UnrolledList<i32> = (1..=2).collect();
        let second: UnrolledList<i32> = (3..=4).collect();
        assert_eq!(first.combine(second).to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_monoid_empty() {
        let empty: UnrolledList<i32> = UnrolledList::empty();
        assert!(empty.is_empty());
    }

    #[rstest]
    fn test_eq_ignores_layout() {
        let packed = with_capacity(5, 1..=6);
        let mut split = with_capacity(5, 2..=6);
        split.insert(0, 1).unwrap();
        assert_ne!(packed.node_sizes(), split.node_sizes());
        assert_eq!(packed, split);
    }
}
