//! An order-statistic binary search tree for Rust.
//!
//! This crate provides [`OrderedTree`], an ordered symbol table backed by an unbalanced
//! binary search tree whose nodes cache the size of their subtree. On top of the usual
//! map operations it answers order-statistic queries in time proportional to the
//! height of the tree:
//!
//! - [`rank`](OrderedTree::rank) - How many keys are strictly smaller than a key
//! - [`select`](OrderedTree::select) - The key at a given sorted position
//! - [`floor`](OrderedTree::floor) / [`ceiling`](OrderedTree::ceiling) - Nearest keys at or below / above
//! - [`range_count`](OrderedTree::range_count) / [`keys_between`](OrderedTree::keys_between) - Range queries
//!
//! The tree never rotates while it is being modified. Instead, [`balance`](OrderedTree::balance)
//! rebuilds it into minimum height in a single O(n) pass whenever the caller decides the
//! shape has degraded.
//!
//! # Example
//!
//! ```
//! use osbst::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for (key, value) in [(10, "TEN"), (3, "THREE"), (1, "ONE"), (5, "FIVE"), (2, "TWO"), (7, "SEVEN")] {
//!     tree.put(key, value);
//! }
//!
//! assert_eq!(tree.len(), 6);
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.rank(&5), 3);
//! assert_eq!(tree.select(2), Ok(&3));
//! assert_eq!(tree.select(3), Ok(&5));
//! assert_eq!(tree.floor(&4), Some(&3));
//! assert_eq!(tree.ceiling(&4), Some(&5));
//!
//! tree.balance();
//! assert_eq!(tree.root_key(), Some(&5));
//! assert_eq!(tree.height(), 3);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Explicit failures** - Empty-table and out-of-range calls return [`TreeError`] instead of panicking
//! - **Deep trees are fine** - Every descent is iterative, so sorted insertions cannot overflow the stack
//! - **`demo`** - Builds the `osbst-demo` binary
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children through niche-optimised handles,
//! so each node is owned by exactly one parent link and the tree cannot form cycles.
//! Mutations record their descent path and recompute subtree sizes along it on the way back up.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod order_statistic;
mod raw;

pub mod ordered_tree;

pub use error::TreeError;
pub use order_statistic::Rank;
pub use ordered_tree::OrderedTree;
