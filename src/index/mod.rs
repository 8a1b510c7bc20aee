//! Index structures.
//!
//! - [`btree`] - In-memory B-tree over any ordered key
//! - [`SharedBTree`] - Lock-protected handle for sharing a tree across threads

pub mod btree;
mod shared;

pub use shared::SharedBTree;
