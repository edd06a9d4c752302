//! This crate exposes a Binary Search Tree (BST) that is built balanced
//! and can be rebuilt balanced on demand, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, so the shape matters. A [`Tree`] built with
//! [`Tree::build`] roots every subtree at the middle of its sorted range,
//! which keeps the height at `O(lg N)`. Plain inserts and deletes don't
//! rotate, so a run of sorted inserts grows a long spine; [`Tree::rebalance`]
//! rebuilds such a tree from its in-order values.
//!
//! ## Traversals
//!
//! [`Tree::pre_order`], [`Tree::in_order`], [`Tree::post_order`] and
//! [`Tree::level_order`] each return a lazy iterator. Collect it for a
//! `Vec`, or hand it a closure to filter or act on values as they come.
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let tree = Tree::build(1..=7);
//!
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), [4, 2, 6, 1, 3, 5, 7]);
//!
//! let mut big = Vec::new();
//! tree.pre_order().filter(|x| **x > 4).for_each(|x| big.push(*x));
//! assert_eq!(big, [6, 5, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod traversal;
mod tree;
mod util;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
