//! An arena-backed Binary Search Tree (BST) with an O(1) membership check
//! and a fixed-width pretty-printer.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This crate adds two twists on top of the textbook structure:
//!
//! - every [`Tree`] keeps a hash-set mirror of its stored values, so a
//!   membership check is `O(1)` instead of `O(height)`;
//! - deletion is a whole-subtree rebuild: the subtree under the doomed node
//!   is detached, its surviving values are harvested, and each one is
//!   re-inserted from the root. No rotations and no successor splicing; the
//!   rebuilt region keeps every invariant but not necessarily its old shape.
//!
//! `Node`s live in a [`generational_arena::Arena`] and refer to each other
//! through [`Index`] handles. In particular a node's back-reference to its
//! parent is just another handle, so the parent link never owns anything
//! and the node graph cannot form a reference cycle.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 2, 8, 1, 4, 7, 9].iter().copied().collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert!(tree.contains(&4));
//!
//! // Deleting an interior node drops its whole subtree and re-inserts the
//! // survivors.
//! tree.delete(&2);
//! assert!(!tree.contains(&2));
//! assert!(tree.contains(&1) && tree.contains(&4));
//!
//! println!("{}", tree.pretty_print());
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod node;
pub mod print;
pub mod tree;

pub use generational_arena::Index;

pub use crate::node::Node;
pub use crate::tree::Tree;

#[cfg(test)]
mod test;
