//! nbtree - A generic in-memory B-tree with single-pass rebalancing.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            nbtree                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Shared handle (index::SharedBTree)                │   │
//! │  │          parking_lot RwLock: many readers | 1 writer     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             BTree façade (index::btree)                  │   │
//! │  │   insert: split-before-descend                           │   │
//! │  │   delete: borrow-or-merge-before-descend                 │   │
//! │  │   search | predecessor/successor | preorder | inorder    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Node (keys + children)                   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Ordered sequences (sequence::OrderedSeq)          │   │
//! │  │     bounded, double-ended, comparator locate             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`sequence`] - Bounded ordered sequences backing each node
//! - [`index`] - The B-tree and its shared handle
//!
//! # Quick Start
//! ```
//! use nbtree::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for k in 1..=9 {
//!     tree.insert(k).unwrap();
//! }
//!
//! assert_eq!(tree.delete(&7).unwrap(), 7);
//! assert_eq!(
//!     tree.iter().copied().collect::<Vec<_>>(),
//!     vec![1, 2, 3, 4, 5, 6, 8, 9]
//! );
//! ```

pub mod common;
pub mod index;
pub mod sequence;

// Re-export commonly used items at crate root for convenience
pub use common::config::{TreeConfig, DEFAULT_MIN_DEGREE, MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, Result};

pub use index::btree::{
    BTree, Comparator, Iter, Loc, NaturalOrder, Node, StatsSnapshot, TreeStats,
};
pub use index::SharedBTree;
pub use sequence::{OrderedSeq, Position};
