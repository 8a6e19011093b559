//! Array-backed stack.
//!
//! [`Stack`] is a thin LIFO façade over a growable array: pushes and pops
//! happen at the array's end, so both are amortized O(1).
//!
//! # Examples
//!
//! ```rust
//! use cowlist::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert!(stack.is_empty());
//! ```

use std::fmt;
use std::iter::FromIterator;

/// A last-in-first-out stack backed by a `Vec`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Pushes an element onto the top of the stack.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.storage.push(element);
    }

    /// Removes and returns the top element, or `None` if the stack is
    /// empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Returns a reference to the top element without removing it, or
    /// `None` if the stack is empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
}

/// The bottom of the vector becomes the bottom of the stack; the last
/// element is the top.
impl<T> From<Vec<T>> for Stack<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { storage: elements }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

/// Renders the stack top-to-bottom between a `----top----` banner and a
/// closing rule.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "----top----")?;
        for element in self.storage.iter().rev() {
            writeln!(formatter, "{element}")?;
        }
        write!(formatter, "-----------")
    }
}

/// Checks that every closing parenthesis in `text` matches an earlier
/// unmatched opening one, using a stack of the pending openers.
///
/// Characters other than `(` and `)` are ignored.
///
/// # Examples
///
/// ```rust
/// use cowlist::stack::balanced_parentheses;
///
/// assert!(balanced_parentheses("((()))"));
/// assert!(balanced_parentheses("a(b)c"));
/// assert!(!balanced_parentheses("(()"));
/// assert!(!balanced_parentheses(")("));
/// ```
#[must_use]
pub fn balanced_parentheses(text: &str) -> bool {
    let mut stack = Stack::new();
    for character in text.chars() {
        match character {
            '(' => stack.push(character),
            ')' => {
                if stack.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

// =============================================================================
// Tests
// =============================================================================
