//! # cowlist
//!
//! Value-semantic linked data structures for Rust.
//!
//! ## Overview
//!
//! The core of this crate is [`CowList`], a singly linked list with
//! copy-on-write semantics: cloning a list is O(1) and shares the
//! underlying node chain, and the first structural mutation through either
//! value privatizes its own copy so the other value never observes the
//! change. Alongside it live two companion structures:
//!
//! - **Binary tree**: [`BinaryNode`] with in-order, pre-order and
//!   post-order traversal callbacks and a [`height`] free function.
//! - **Stack**: an array-backed [`Stack`] with `push`/`pop`/`peek`.
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` internally, making lists sendable
//!   across threads (for `Send + Sync` element types)
//! - `serde`: `Serialize`/`Deserialize` support for [`CowList`]
//!
//! ## Example
//!
//! ```rust
//! use cowlist::CowList;
//!
//! let mut list: CowList<i32> = (1..=3).collect();
//! let snapshot = list.clone(); // O(1), shares the chain
//!
//! list.push(0);
//! list.append(4);
//!
//! // The snapshot never sees the mutations.
//! assert_eq!(format!("{list}"), "0 -> 1 -> 2 -> 3 -> 4");
//! assert_eq!(format!("{snapshot}"), "1 -> 2 -> 3");
//! ```
//!
//! [`CowList`]: list::CowList
//! [`BinaryNode`]: tree::BinaryNode
//! [`height`]: tree::height
//! [`Stack`]: stack::Stack

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and free functions.
///
/// # Usage
///
/// ```rust
/// use cowlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::{merge_sorted, middle, visit_in_reverse};
    pub use crate::list::{CowList, Cursor, NodeId};
    pub use crate::stack::{Stack, balanced_parentheses};
    pub use crate::tree::{BinaryNode, height};
}

pub mod algorithms;
pub mod list;
pub mod stack;
pub mod tree;

pub use list::CowList;
pub use stack::Stack;
pub use tree::BinaryNode;
pub use tree::height;
