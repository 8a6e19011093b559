//! Copy-on-write singly-linked list.
//!
//! This module provides [`CowList`], a value-semantic singly-linked list
//! whose clones share the underlying node chain until one of them mutates.
//!
//! # Overview
//!
//! `CowList` behaves like an independently owned list at every call site,
//! while `clone` is O(1): the clone shares the node chain with the
//! original. The first structural mutation through either value detects
//! the sharing and privatizes a full copy of the chain, so the edit is
//! never visible through the other value.
//!
//! ```text
//! list:          1 -> 2 -> 3
//! copy = list.clone()          // both values reference the same chain
//! copy.push(0)                 // copy privatizes: 0 -> 1 -> 2 -> 3
//!                              // list still sees: 1 -> 2 -> 3
//! ```
//!
//! # Node handles
//!
//! Positional operations (`insert_after`, `remove_after`) address nodes
//! through opaque [`NodeId`] handles obtained from [`CowList::node_at`].
//! Handles denote positions in the chain and stay valid across
//! privatization; a handle that does not name a live node of this list
//! makes the operation return `None`.
//!
//! # Time Complexity
//!
//! | Operation      | Shared chain | Private chain |
//! |----------------|--------------|---------------|
//! | `clone`        | O(1)         | O(1)          |
//! | `push`         | O(n)         | O(1)          |
//! | `append`       | O(n)         | O(1)          |
//! | `pop`          | O(n)         | O(1)          |
//! | `remove_last`  | O(n)         | O(n)          |
//! | `insert_after` | O(n)         | O(1)          |
//! | `remove_after` | O(n)         | O(1)          |
//! | `node_at`      | O(n)         | O(n)          |
//! | `len`          | O(1)         | O(1)          |
//!
//! The O(n) in the shared column is the one-time privatization copy.
//!
//! # Examples
//!
//! ```rust
//! use cowlist::CowList;
//!
//! let mut list = CowList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//!
//! let snapshot = list.clone();
//! list.pop();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::mem;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// An opaque handle to a node of a [`CowList`].
///
/// Handles are positions in the list's internal node table. They are
/// `Copy` and remain valid across privatization, but a handle obtained
/// from one list means nothing to another list, and a handle whose node
/// has been removed is stale. Operations given a stale or foreign handle
/// return `None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// A single node of the chain: an element plus the handle of its
/// successor.
#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// The node chain backing one or more list values.
///
/// Nodes live in a slot table addressed by [`NodeId`]; removal vacates the
/// slot without compacting the table, so handles held by the caller keep
/// their meaning. The table is reset once the list becomes empty.
#[derive(Clone, Debug)]
pub(crate) struct Chain<T> {
    slots: Vec<Option<Node<T>>>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    pub(crate) length: usize,
}

impl<T> Chain<T> {
    const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    fn allocate(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        self.slots.push(Some(Node { value, next }));
        NodeId(self.slots.len() - 1)
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub(crate) fn value_of(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.next)
    }

    pub(crate) fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    /// Moves every slot of `other` into this table, remapping the moved
    /// nodes' handles past the end of the existing slots. Returns the
    /// remapped handle of `other`'s head.
    pub(crate) fn absorb(&mut self, other: Self) -> Option<NodeId> {
        let offset = self.slots.len();
        let other_head = other.head;
        self.slots.reserve(other.slots.len());
        for slot in other.slots {
            self.slots.push(slot.map(|node| Node {
                value: node.value,
                next: node.next.map(|id| NodeId(id.0 + offset)),
            }));
        }
        self.length += other.length;
        other_head.map(|id| NodeId(id.0 + offset))
    }

    /// Restores the head/tail invariant after removals: an empty list has
    /// neither head nor tail, and its slot table is released.
    fn reset_if_empty(&mut self) {
        if self.head.is_none() {
            self.tail = None;
            self.length = 0;
            self.slots.clear();
        }
    }
}

/// A value-semantic singly-linked list with copy-on-write clones.
///
/// See the [module documentation](self) for an overview.
///
/// # Examples
///
/// ```rust
/// use cowlist::CowList;
///
/// let mut list: CowList<i32> = (1..=3).collect();
/// assert_eq!(list.head(), Some(&1));
///
/// list.push(0);
/// assert_eq!(format!("{list}"), "0 -> 1 -> 2 -> 3");
/// ```
pub struct CowList<T> {
    chain: ReferenceCounter<Chain<T>>,
}

impl<T> CowList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let list: CowList<i32> = CowList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: ReferenceCounter::new(Chain::new()),
        }
    }

    /// Creates a list containing a single element.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        let mut chain = Chain::new();
        let id = chain.allocate(value, None);
        chain.head = Some(id);
        chain.tail = Some(id);
        chain.length = 1;
        Self::from_chain(chain)
    }

    pub(crate) fn from_chain(chain: Chain<T>) -> Self {
        Self {
            chain: ReferenceCounter::new(chain),
        }
    }

    fn chain(&self) -> &Chain<T> {
        &self.chain
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let empty: CowList<i32> = CowList::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.head.is_none()
    }

    /// Returns `true` if this list currently shares its chain with at
    /// least one clone.
    ///
    /// Sharing is transparent: the next mutation through either value
    /// privatizes a copy. This accessor exists for tests and diagnostics.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        ReferenceCounter::strong_count(&self.chain) > 1
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.chain.head.and_then(|id| self.chain.value_of(id))
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.chain.tail.and_then(|id| self.chain.value_of(id))
    }

    /// Returns a reference to the element at the given zero-based index,
    /// or `None` if the index is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(n) where n = index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index)
            .and_then(|id| self.chain.value_of(id))
    }

    /// Returns the handle of the node at the given zero-based index, or
    /// `None` if the index exceeds the length.
    ///
    /// This is a pure read: it walks the chain on every call and never
    /// privatizes it. The index is a traversal count, not a stored
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let second = list.node_at(1).unwrap();
    /// assert_eq!(list.value(second), Some(&2));
    /// assert_eq!(list.node_at(3), None);
    /// ```
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        let mut current = self.chain.head;
        let mut remaining = index;

        while let Some(id) = current {
            if remaining == 0 {
                return Some(id);
            }
            remaining -= 1;
            current = self.chain.next_of(id);
        }
        None
    }

    /// Returns the handle of the first node, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.chain.head
    }

    /// Returns the handle of the last node, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn last_node(&self) -> Option<NodeId> {
        self.chain.tail
    }

    /// Returns the handle of the node following `node`, or `None` if
    /// `node` is the last node or is not a live node of this list.
    #[inline]
    #[must_use]
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.chain.next_of(node)
    }

    /// Returns a reference to the value stored at `node`, or `None` if
    /// `node` is not a live node of this list.
    #[inline]
    #[must_use]
    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.chain.value_of(node)
    }

    /// Returns an iterator over references to the elements, head to tail.
    ///
    /// Iteration is finite and restartable: a fresh call always starts at
    /// the current head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> CowListIterator<'_, T> {
        CowListIterator {
            chain: self.chain(),
            current: self.chain.head,
        }
    }

    /// Returns a cursor at the first node (the head position).
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            chain: self.chain(),
            node: self.chain.head,
        }
    }

    /// Returns the one-past-the-end cursor (the position after the tail).
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor {
            chain: self.chain(),
            node: None,
        }
    }

    /// Returns a cursor at the given node handle.
    #[must_use]
    pub fn cursor_at(&self, node: NodeId) -> Cursor<'_, T> {
        Cursor {
            chain: self.chain(),
            node: Some(node),
        }
    }
}

impl<T: Clone> CowList<T> {
    /// Grants mutable access to the chain, privatizing it first when it is
    /// shared with clones. Exact: a chain is copied if and only if another
    /// list value still references it.
    pub(crate) fn chain_mut(&mut self) -> &mut Chain<T> {
        ReferenceCounter::make_mut(&mut self.chain)
    }

    /// Takes the chain out of this list, copying it only if it is shared.
    pub(crate) fn into_chain(self) -> Chain<T> {
        ReferenceCounter::try_unwrap(self.chain).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Prepends an element, making it the new head.
    ///
    /// Sets the tail as well if the list was empty.
    ///
    /// # Complexity
    ///
    /// O(1) once the chain is private; O(n) when a shared chain must be
    /// privatized first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list = CowList::new();
    /// list.push(2);
    /// list.push(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn push(&mut self, value: T) {
        let chain = self.chain_mut();
        let next = chain.head;
        let id = chain.allocate(value, next);
        chain.head = Some(id);
        if chain.tail.is_none() {
            chain.tail = Some(id);
        }
        chain.length += 1;
    }

    /// Appends an element after the tail.
    ///
    /// An empty list delegates to [`push`](Self::push).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list = CowList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(format!("{list}"), "1 -> 2");
    /// ```
    pub fn append(&mut self, value: T) {
        if self.is_empty() {
            self.push(value);
            return;
        }

        let chain = self.chain_mut();
        let id = chain.allocate(value, None);
        if let Some(tail_id) = chain.tail {
            chain.link(tail_id, Some(id));
        }
        chain.tail = Some(id);
        chain.length += 1;
    }

    /// Inserts an element immediately after the given node and returns the
    /// new node's handle.
    ///
    /// Inserting after the tail updates the tail. Returns `None` when
    /// `node` is not a live node of this list; the list is unchanged in
    /// that case. The returned handle can be used for chained inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let second = list.node_at(1).unwrap();
    /// list.insert_after(second, 9);
    /// assert_eq!(format!("{list}"), "1 -> 2 -> 9 -> 3");
    /// ```
    pub fn insert_after(&mut self, node: NodeId, value: T) -> Option<NodeId> {
        if self.chain.tail == Some(node) {
            self.append(value);
            return self.chain.tail;
        }

        let chain = self.chain_mut();
        let next = chain.node(node)?.next;
        let id = chain.allocate(value, next);
        chain.link(node, Some(id));
        chain.length += 1;
        Some(id)
    }

    /// Removes the head and returns its value, or `None` if the list is
    /// empty.
    ///
    /// Popping the only element empties the list: both head and tail
    /// become absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list = CowList::singleton(1);
    /// assert_eq!(list.pop(), Some(1));
    /// assert!(list.is_empty());
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let chain = self.chain_mut();
        let head_id = chain.head?;
        let node = chain.release(head_id)?;
        chain.head = node.next;
        chain.length -= 1;
        chain.reset_if_empty();
        Some(node.value)
    }

    /// Removes the tail and returns its value, or `None` if the list is
    /// empty.
    ///
    /// A one-element list delegates to [`pop`](Self::pop); otherwise the
    /// chain is walked to find the second-to-last node.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_last(&mut self) -> Option<T> {
        if self.len() <= 1 {
            return self.pop();
        }

        let chain = self.chain_mut();
        let tail_id = chain.tail?;
        let mut current = chain.head?;
        while let Some(next) = chain.next_of(current) {
            if next == tail_id {
                break;
            }
            current = next;
        }

        let removed = chain.release(tail_id)?;
        chain.link(current, None);
        chain.tail = Some(current);
        chain.length -= 1;
        Some(removed.value)
    }

    /// Removes the node following `node` and returns its value.
    ///
    /// Returns `None` when `node` has no successor or is not a live node
    /// of this list. Removing the tail retargets the tail to `node`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let first = list.first_node().unwrap();
    /// assert_eq!(list.remove_after(first), Some(2));
    /// assert_eq!(format!("{list}"), "1 -> 3");
    /// ```
    pub fn remove_after(&mut self, node: NodeId) -> Option<T> {
        let chain = self.chain_mut();
        let target = chain.next_of(node)?;
        let removed = chain.release(target)?;
        chain.link(node, removed.next);
        if chain.tail == Some(target) {
            chain.tail = Some(node);
        }
        chain.length -= 1;
        Some(removed.value)
    }

    /// Reverses the list in place.
    ///
    /// One pass: the old head becomes the tail, and each node's successor
    /// link is redirected to its predecessor.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(1) extra space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// list.reverse();
    /// assert_eq!(format!("{list}"), "3 -> 2 -> 1");
    /// ```
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }

        let chain = self.chain_mut();
        chain.tail = chain.head;
        let mut previous: Option<NodeId> = None;
        let mut current = chain.head;
        while let Some(id) = current {
            let Some(node) = chain.node_mut(id) else {
                break;
            };
            let next = mem::replace(&mut node.next, previous);
            previous = Some(id);
            current = next;
        }
        chain.head = previous;
    }
}

impl<T: Clone + PartialEq> CowList<T> {
    /// Removes every element equal to `target`, preserving the relative
    /// order of the remaining elements.
    ///
    /// Matching head nodes are stripped first, then the remainder is
    /// scanned and matches are spliced out; the tail is recomputed to the
    /// last remaining node. Removing everything leaves the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::CowList;
    ///
    /// let mut list: CowList<i32> = vec![1, 2, 2, 3, 2].into_iter().collect();
    /// list.remove_all_occurrences(&2);
    /// assert_eq!(format!("{list}"), "1 -> 3");
    /// ```
    pub fn remove_all_occurrences(&mut self, target: &T) {
        if self.is_empty() {
            return;
        }

        let chain = self.chain_mut();

        while let Some(head_id) = chain.head {
            let matches = chain
                .node(head_id)
                .is_some_and(|node| node.value == *target);
            if !matches {
                break;
            }
            let removed = chain.release(head_id);
            chain.head = removed.and_then(|node| node.next);
            chain.length -= 1;
        }

        let mut previous = chain.head;
        let mut current = previous.and_then(|id| chain.next_of(id));
        while let Some(id) = current {
            let (matches, next) = match chain.node(id) {
                Some(node) => (node.value == *target, node.next),
                None => break,
            };
            if matches {
                chain.release(id);
                if let Some(previous_id) = previous {
                    chain.link(previous_id, next);
                }
                chain.length -= 1;
            } else {
                previous = Some(id);
            }
            current = next;
        }

        chain.tail = previous;
        chain.reset_if_empty();
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// An external iteration handle referencing a position in a list's chain.
///
/// The start position is the head, the end position is one past the tail
/// (an empty node reference), and [`successor`](Self::successor) advances
/// by one node.
///
/// Two cursors are equal when they reference the same position of the same
/// list. A cursor precedes another when the other's position is reachable
/// from it by following successor links; the end cursor therefore follows
/// every node cursor. Cursors of different lists are unordered.
///
/// # Examples
///
/// ```rust
/// use cowlist::CowList;
///
/// let list: CowList<i32> = (1..=3).collect();
/// let first = list.cursor_front();
/// let second = first.successor();
///
/// assert_eq!(second.value(), Some(&2));
/// assert!(first < second);
/// assert!(second < list.cursor_end());
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    chain: &'a Chain<T>,
    node: Option<NodeId>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Returns a reference to the value at this position, or `None` for
    /// the end position.
    #[must_use]
    pub fn value(&self) -> Option<&'a T> {
        self.node.and_then(|id| self.chain.value_of(id))
    }

    /// Returns the handle of the referenced node, or `None` for the end
    /// position.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Returns `true` if this is the one-past-the-end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the cursor one position further along the chain.
    ///
    /// Advancing the end cursor yields the end cursor again.
    #[must_use]
    pub fn successor(self) -> Self {
        Self {
            chain: self.chain,
            node: self.node.and_then(|id| self.chain.next_of(id)),
        }
    }

    /// Walks successor links from this position; `true` if `target` is
    /// found. The end position is reachable from every node position.
    fn reaches(&self, target: Option<NodeId>) -> bool {
        let mut current = self.node;
        while let Some(id) = current {
            let next = self.chain.next_of(id);
            if next == target {
                return true;
            }
            current = next;
        }
        false
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.chain, other.chain) && self.node == other.node
    }
}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !std::ptr::eq(self.chain, other.chain) {
            return None;
        }
        if self.node == other.node {
            return Some(Ordering::Equal);
        }
        if self.reaches(other.node) {
            return Some(Ordering::Less);
        }
        if other.reaches(self.node) {
            return Some(Ordering::Greater);
        }
        None
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over references to elements of a [`CowList`].
pub struct CowListIterator<'a, T> {
    chain: &'a Chain<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for CowListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.chain.node(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

/// An owning iterator over elements of a [`CowList`].
///
/// The backing chain is privatized at most once, on the first element.
pub struct CowListIntoIterator<T: Clone> {
    list: CowList<T>,
}

impl<T: Clone> Iterator for CowListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> ExactSizeIterator for CowListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Cloning shares the chain; this is the copy side of copy-on-write.
///
/// O(1): only the reference count is touched. The first structural
/// mutation through either value privatizes its own chain.
impl<T> Clone for CowList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            chain: ReferenceCounter::clone(&self.chain),
        }
    }
}

impl<T> Default for CowList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CowList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        for value in iter {
            let id = chain.allocate(value, None);
            match chain.tail {
                Some(tail_id) => chain.link(tail_id, Some(id)),
                None => chain.head = Some(id),
            }
            chain.tail = Some(id);
            chain.length += 1;
        }
        Self::from_chain(chain)
    }
}

impl<T: Clone> IntoIterator for CowList<T> {
    type Item = T;
    type IntoIter = CowListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CowListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a CowList<T> {
    type Item = &'a T;
    type IntoIter = CowListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for CowList<T> {
    fn eq(&self, other: &Self) -> bool {
        if ReferenceCounter::ptr_eq(&self.chain, &other.chain) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for CowList<T> {}

impl<T: Hash> Hash for CowList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CowList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the empty list as the fixed marker `"Empty List"`, and a
/// non-empty list as its values joined by `" -> "`.
impl<T: fmt::Display> fmt::Display for CowList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("Empty List");
        }
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, " -> ")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CowList<T> {
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
struct CowListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CowListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CowListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CowList<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = CowList::new();
        // Appending through the chain directly keeps this O(n); the fresh
        // chain is never shared, so no privatization copies occur either.
        let chain = ReferenceCounter::get_mut(&mut list.chain);
        if let Some(chain) = chain {
            while let Some(value) = seq.next_element()? {
                let id = chain.allocate(value, None);
                match chain.tail {
                    Some(tail_id) => chain.link(tail_id, Some(id)),
                    None => chain.head = Some(id),
                }
                chain.tail = Some(id);
                chain.length += 1;
            }
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CowList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CowListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
