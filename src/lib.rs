//! This crate exposes a link-based Binary Search Tree (BST) with ordered
//! insertion, deletion, lookup, traversal, range queries and a full
//! rebalancing operation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value. Duplicates are allowed and
//!    always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree does not
//! balance itself on insertion: inserting sorted input produces a tree as tall
//! as a linked list. [`Tree::rebalance`][linked::Tree::rebalance] rebuilds it
//! with the minimal height of `O(lg N)`.
//!
//! None of the operations recurse proportionally to the height of the tree,
//! so even fully degenerate trees of hundreds of thousands of nodes can be
//! built, searched, traversed and dropped.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod linked;
mod util;


pub use error::TreeError;
pub use linked::Tree;
