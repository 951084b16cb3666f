//! Fixed-capacity nodes of the unrolled chain.
//!
//! A node owns a boxed slice of `capacity` slots. Occupied slots always form a
//! contiguous prefix `[0, occupied)`; everything after it is `None`.

/// Internal node structure for the unrolled list.
pub(super) struct Node<T> {
    /// Element slots; only the first `occupied` are `Some`.
    slots: Box<[Option<T>]>,
    /// Number of live elements at the front of `slots`.
    occupied: usize,
    /// The next node in the chain (if any).
    pub(super) next: Option<Box<Self>>,
}

impl<T> Node<T> {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            occupied: 0,
            next: None,
        }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub(super) const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(super) fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// The occupied prefix of the slot array.
    #[inline]
    pub(super) fn occupied_slots(&self) -> &[Option<T>] {
        &self.slots[..self.occupied]
    }

    /// Splits the node into its occupied slots and its successor link.
    #[inline]
    pub(super) fn parts_mut(&mut self) -> (&mut [Option<T>], Option<&mut Self>) {
        (&mut self.slots[..self.occupied], self.next.as_deref_mut())
    }

    /// Consumes the node, returning its slots and its successor link.
    pub(super) fn into_parts(self) -> (Vec<Option<T>>, Option<Box<Self>>) {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.occupied);
        (slots, self.next)
    }

    #[inline]
    pub(super) fn get(&self, offset: usize) -> Option<&T> {
        self.occupied_slots().get(offset).and_then(Option::as_ref)
    }

    #[inline]
    pub(super) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.slots[..self.occupied]
            .get_mut(offset)
            .and_then(Option::as_mut)
    }

    /// Replaces the element at `offset`, returning the previous one.
    pub(super) fn replace(&mut self, offset: usize, element: T) -> Option<T> {
        self.slots[..self.occupied]
            .get_mut(offset)
            .and_then(|slot| slot.replace(element))
    }

    /// Writes `element` at `offset`, shifting the tail of the block right.
    ///
    /// The caller guarantees the node is not full and `offset <= len()`.
    pub(super) fn insert(&mut self, offset: usize, element: T) {
        debug_assert!(!self.is_full());
        debug_assert!(offset <= self.occupied);
        self.slots[self.occupied] = Some(element);
        self.slots[offset..=self.occupied].rotate_right(1);
        self.occupied += 1;
    }

    /// Removes the element at `offset`, shifting the tail of the block left.
    pub(super) fn remove(&mut self, offset: usize) -> Option<T> {
        if offset >= self.occupied {
            return None;
        }
        let removed = self.slots[offset].take();
        self.slots[offset..self.occupied].rotate_left(1);
        self.occupied -= 1;
        removed
    }

    /// Guarantees room for one insertion at `offset`.
    ///
    /// Returns the node that now holds the insertion point together with the
    /// offset inside it. A full tail node receiving an element at its end
    /// gets a fresh successor; any other full node is split in half.
    pub(super) fn make_room(&mut self, offset: usize) -> (&mut Self, usize) {
        if !self.is_full() {
            return (self, offset);
        }
        if self.next.is_none() && offset == self.occupied {
            let capacity = self.capacity();
            return (&mut **self.next.insert(Box::new(Self::new(capacity))), 0);
        }
        self.split(offset)
    }

    /// Moves the upper half of the block into a new successor node.
    fn split(&mut self, offset: usize) -> (&mut Self, usize) {
        let split_at = self.occupied / 2;
        let mut successor = Box::new(Self::new(self.capacity()));
        for (target, source) in successor
            .slots
            .iter_mut()
            .zip(&mut self.slots[split_at..self.occupied])
        {
            *target = source.take();
        }
        successor.occupied = self.occupied - split_at;
        successor.next = self.next.take();
        self.occupied = split_at;

        if offset >= split_at {
            (&mut **self.next.insert(successor), offset - split_at)
        } else {
            self.next = Some(successor);
            (self, offset)
        }
    }

    /// Absorbs the successor when both blocks fit in this node's capacity.
    ///
    /// Returns `true` if a merge happened.
    pub(super) fn absorb_next(&mut self) -> bool {
        let fits = self
            .next
            .as_ref()
            .is_some_and(|next| self.occupied + next.occupied <= self.capacity());
        if !fits {
            return false;
        }
        if let Some(mut next) = self.next.take() {
            let moved = next.occupied;
            for (target, source) in self.slots[self.occupied..]
                .iter_mut()
                .zip(&mut next.slots[..moved])
            {
                *target = source.take();
            }
            self.occupied += moved;
            self.next = next.next.take();
        }
        true
    }

    /// Unlinks the successor node, splicing in whatever follows it.
    pub(super) fn unlink_next(&mut self) {
        if let Some(mut removed) = self.next.take() {
            self.next = removed.next.take();
        }
    }

    /// Applies `function` to every occupied slot.
    pub(super) fn map_in_place<F>(&mut self, function: &mut F)
    where
        F: FnMut(T) -> T,
    {
        for slot in &mut self.slots[..self.occupied] {
            *slot = slot.take().map(&mut *function);
        }
    }

    /// Builds a detached node with the same layout and mapped elements.
    pub(super) fn map_elements<B, F>(self, function: &mut F) -> Node<B>
    where
        F: FnMut(T) -> B,
    {
        Node {
            slots: self
                .slots
                .into_vec()
                .into_iter()
                .map(|slot| slot.map(&mut *function))
                .collect(),
            occupied: self.occupied,
            next: None,
        }
    }

    /// Like [`Node::map_elements`], borrowing the source node.
    pub(super) fn map_elements_ref<B, F>(&self, function: &mut F) -> Node<B>
    where
        F: FnMut(&T) -> B,
    {
        Node {
            slots: self
                .slots
                .iter()
                .map(|slot| slot.as_ref().map(&mut *function))
                .collect(),
            occupied: self.occupied,
            next: None,
        }
    }
}

/// Links detached nodes into a chain in iteration order and returns its head.
///
/// An empty iterator yields a single empty node of `capacity` slots.
pub(super) fn link<T, I>(nodes: I, capacity: usize) -> Node<T>
where
    I: IntoIterator<Item = Node<T>>,
{
    let mut nodes = nodes.into_iter();
    let mut head = nodes.next().unwrap_or_else(|| Node::new(capacity));
    let mut tail = &mut head;
    for node in nodes {
        tail = &mut **tail.next.insert(Box::new(node));
    }
    head
}

/// Drops a chain one node at a time so long chains cannot exhaust the stack.
pub(super) fn drop_chain<T>(mut next: Option<Box<Node<T>>>) {
    while let Some(mut node) = next {
        next = node.next.take();
    }
}
