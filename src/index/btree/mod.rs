//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - The façade owning the root; all public operations live here
//! - [`Node`] - A node: leaf flag, degree, keys, owned children
//! - [`Loc`] - A search result (node + position)
//! - [`Comparator`] / [`NaturalOrder`] - Key ordering
//! - [`TreeStats`] - Split/merge/rotation counters
//!
//! The algorithms are split by concern:
//! - `split` / `insert` - proactive top-down splitting
//! - `delete` - single-pass delete with borrow-then-merge fix-ups
//! - [`locator`] - search and predecessor/successor lookup
//! - [`traversal`] - preorder, in-order, and the [`Iter`] iterator
//! - `check` - invariant validation backing [`BTree::validate`]

mod check;
mod compare;
mod delete;
mod insert;
pub mod locator;
mod node;
mod split;
mod stats;
pub mod traversal;
mod tree;

pub use compare::{Comparator, NaturalOrder};
pub use locator::Loc;
pub use node::Node;
pub use stats::{StatsSnapshot, TreeStats};
pub use traversal::Iter;
pub use tree::BTree;
