//! Free-function algorithms over [`CowList`].
//!
//! These operate on list values rather than through methods:
//!
//! - [`merge_sorted`]: merge two individually sorted lists by splicing
//!   their existing nodes together
//! - [`middle`]: find the structural midpoint with the fast/slow
//!   two-pointer walk
//! - [`visit_in_reverse`]: visit values tail-to-head without reversing
//!   the list
//!
//! # Examples
//!
//! ```rust
//! use cowlist::CowList;
//! use cowlist::algorithms::merge_sorted;
//!
//! let left: CowList<i32> = vec![1, 3, 5].into_iter().collect();
//! let right: CowList<i32> = vec![2, 4].into_iter().collect();
//! let merged = merge_sorted(left, right);
//! assert_eq!(format!("{merged}"), "1 -> 2 -> 3 -> 4 -> 5");
//! ```

use crate::list::{CowList, NodeId};
use crate::stack::Stack;

/// Merges two individually sorted lists into one sorted list.
///
/// Consumes both inputs and splices their existing nodes: the
/// smaller-valued front node is attached to the result tail at each step,
/// and once one input runs out the other's remaining suffix is attached
/// whole. No per-element node is rebuilt. On equal values the right
/// list's node is chosen, so merging is stable with the left list first.
///
/// An empty input degrades to the other list. The inputs must each be
/// sorted ascending; the result on unsorted inputs is unspecified (no
/// validation is performed).
///
/// # Complexity
///
/// O(n + m)
///
/// # Examples
///
/// ```rust
/// use cowlist::CowList;
/// use cowlist::algorithms::merge_sorted;
///
/// let left: CowList<i32> = vec![1, 3, 5].into_iter().collect();
/// let right: CowList<i32> = vec![2, 4].into_iter().collect();
/// let merged = merge_sorted(left, right);
/// assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn merge_sorted<T: Clone + Ord>(left: CowList<T>, right: CowList<T>) -> CowList<T> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut merged = left;
    let right_chain = right.into_chain();
    let chain = merged.chain_mut();
    let mut right_cursor = chain.absorb(right_chain);
    let mut left_cursor = chain.head;

    let mut head: Option<NodeId> = None;
    let mut tail: Option<NodeId> = None;

    // Splice the smaller front node onto the result tail; `<` makes ties
    // take the right node.
    while let (Some(left_id), Some(right_id)) = (left_cursor, right_cursor) {
        let favour_left = match (chain.value_of(left_id), chain.value_of(right_id)) {
            (Some(left_value), Some(right_value)) => left_value < right_value,
            _ => break,
        };
        let chosen = if favour_left {
            left_cursor = chain.next_of(left_id);
            left_id
        } else {
            right_cursor = chain.next_of(right_id);
            right_id
        };
        match tail {
            Some(tail_id) => chain.link(tail_id, Some(chosen)),
            None => head = Some(chosen),
        }
        tail = Some(chosen);
    }

    // Attach whichever suffix remains.
    let remainder = left_cursor.or(right_cursor);
    if let Some(tail_id) = tail {
        chain.link(tail_id, remainder);
    }

    chain.head = head;

    // The spliced tail is somewhere down the attached suffix; walk to it.
    let mut end = tail;
    while let Some(id) = end {
        match chain.next_of(id) {
            Some(next) => end = Some(next),
            None => break,
        }
    }
    chain.tail = end;

    merged
}

/// Returns the handle of the node at the structural midpoint of the list,
/// or `None` if the list is empty.
///
/// Classic two-pointer walk: a fast cursor advances two steps per
/// iteration, a slow cursor one; when the fast cursor exhausts the chain
/// the slow cursor sits at the middle. For even-length lists this is the
/// second of the two middle nodes.
///
/// # Examples
///
/// ```rust
/// use cowlist::CowList;
/// use cowlist::algorithms::middle;
///
/// let odd: CowList<i32> = (1..=5).collect();
/// assert_eq!(odd.value(middle(&odd).unwrap()), Some(&3));
///
/// let even: CowList<i32> = (1..=4).collect();
/// assert_eq!(even.value(middle(&even).unwrap()), Some(&3));
/// ```
#[must_use]
pub fn middle<T>(list: &CowList<T>) -> Option<NodeId> {
    let mut slow = list.first_node();
    let mut fast = list.first_node();

    loop {
        let Some(step) = fast.and_then(|id| list.successor(id)) else {
            break;
        };
        fast = list.successor(step);
        slow = slow.and_then(|id| list.successor(id));
    }

    slow
}

/// Visits every value tail-to-head without modifying the list.
///
/// Values are staged on an explicit [`Stack`] and popped back off, so the
/// traversal depth is bounded regardless of list length.
///
/// # Examples
///
/// ```rust
/// use cowlist::CowList;
/// use cowlist::algorithms::visit_in_reverse;
///
/// let list: CowList<i32> = (1..=3).collect();
/// let mut seen = Vec::new();
/// visit_in_reverse(&list, |value| seen.push(*value));
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
pub fn visit_in_reverse<T, F>(list: &CowList<T>, mut visit: F)
where
    F: FnMut(&T),
{
    let mut stack = Stack::new();
    for value in list {
        stack.push(value);
    }
    while let Some(value) = stack.pop() {
        visit(value);
    }
}

// =============================================================================
// Tests
// =============================================================================
