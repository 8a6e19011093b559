//! Binary tree node with traversal callbacks.
//!
//! [`BinaryNode`] is a plain owned binary tree node; the three classic
//! traversal orders are exposed as visitor callbacks. All traversals and
//! the [`height`] function are iterative with explicit work stacks, so
//! deeply skewed trees cannot exhaust the call stack.
//!
//! # Examples
//!
//! ```rust
//! use cowlist::BinaryNode;
//!
//! let mut root = BinaryNode::new(7);
//! root.left = Some(Box::new(BinaryNode::new(1)));
//! root.right = Some(Box::new(BinaryNode::new(9)));
//!
//! let mut values = Vec::new();
//! root.in_order(|value| values.push(*value));
//! assert_eq!(values, vec![1, 7, 9]);
//! ```

/// A node of an owned binary tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryNode<T> {
    /// The element stored in this node.
    pub value: T,
    /// The left subtree, if any.
    pub left: Option<Box<BinaryNode<T>>>,
    /// The right subtree, if any.
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    /// Creates a leaf node holding `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Visits the subtree rooted here in order: left subtree, node, right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlist::BinaryNode;
    ///
    /// let mut root = BinaryNode::new(2);
    /// root.left = Some(Box::new(BinaryNode::new(1)));
    /// root.right = Some(Box::new(BinaryNode::new(3)));
    ///
    /// let mut values = Vec::new();
    /// root.in_order(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<&Self> = Vec::new();
        let mut current = Some(self);

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                visit(&node.value);
                current = node.right.as_deref();
            }
        }
    }

    /// Visits the subtree rooted here pre-order: node, left subtree,
    /// right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<&Self> = vec![self];

        while let Some(node) = stack.pop() {
            visit(&node.value);
            // Right first so the left subtree is popped (visited) first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
    }

    /// Visits the subtree rooted here post-order: left subtree, right
    /// subtree, node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // Reverse pre-order (node, right, left) staged on a second stack
        // comes back out as post-order.
        let mut stack: Vec<&Self> = vec![self];
        let mut output: Vec<&T> = Vec::new();

        while let Some(node) = stack.pop() {
            output.push(&node.value);
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }

        while let Some(value) = output.pop() {
            visit(value);
        }
    }
}

/// Returns the height of the subtree rooted at `node`.
///
/// An absent subtree has height −1; a leaf has height 0; otherwise the
/// height is one more than the taller child's. Computed level by level,
/// without recursion.
///
/// # Examples
///
/// ```rust
/// use cowlist::{BinaryNode, height};
///
/// assert_eq!(height::<i32>(None), -1);
///
/// let mut root = BinaryNode::new(1);
/// assert_eq!(height(Some(&root)), 0);
///
/// root.left = Some(Box::new(BinaryNode::new(2)));
/// assert_eq!(height(Some(&root)), 1);
/// ```
#[must_use]
pub fn height<T>(node: Option<&BinaryNode<T>>) -> i32 {
    let Some(root) = node else {
        return -1;
    };

    let mut height = -1;
    let mut level: Vec<&BinaryNode<T>> = vec![root];

    while !level.is_empty() {
        height += 1;
        let mut next_level = Vec::new();
        for node in level {
            if let Some(left) = node.left.as_deref() {
                next_level.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                next_level.push(right);
            }
        }
        level = next_level;
    }

    height
}

// =============================================================================
// Tests
// =============================================================================
