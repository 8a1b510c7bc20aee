//! Shared tree handle.
//!
//! [`BTree`] does no internal locking. [`SharedBTree`] serializes access
//! from the outside: any number of concurrent readers, or one writer.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::Result;
use crate::index::btree::{BTree, Comparator, NaturalOrder};

/// A cloneable, thread-safe handle to a [`BTree`].
///
/// # Thread Safety
/// - Lookups and traversals take the read lock (shared)
/// - `insert` / `delete` take the write lock (exclusive)
///
/// # Example
/// ```
/// use nbtree::{BTree, SharedBTree};
///
/// let shared = SharedBTree::new(BTree::new(3).unwrap());
/// let handle = shared.clone();
///
/// std::thread::spawn(move || handle.insert(7).unwrap())
///     .join()
///     .unwrap();
///
/// assert!(shared.contains(&7));
/// ```
pub struct SharedBTree<K, C = NaturalOrder> {
    inner: Arc<RwLock<BTree<K, C>>>,
}

impl<K, C: Comparator<K>> SharedBTree<K, C> {
    /// Take ownership of `tree` behind a lock.
    pub fn new(tree: BTree<K, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Insert under the write lock.
    pub fn insert(&self, key: K) -> Result<()> {
        self.inner.write().insert(key)
    }

    /// Delete under the write lock.
    pub fn delete(&self, key: &K) -> Result<K> {
        self.inner.write().delete(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` with shared access to the tree.
    pub fn read<R>(&self, f: impl FnOnce(&BTree<K, C>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut BTree<K, C>) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<K: Clone, C: Comparator<K>> SharedBTree<K, C> {
    /// Copy out every key in sorted order.
    pub fn snapshot(&self) -> Vec<K> {
        self.inner.read().iter().cloned().collect()
    }
}

impl<K, C> Clone for SharedBTree<K, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
