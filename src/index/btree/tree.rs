//! BTree façade - owns the root and exposes the public operations.

use std::fmt;

use tracing::{debug, warn};

use crate::common::config::TreeConfig;
use crate::common::{Error, Result};
use crate::index::btree::locator::{self, Loc};
use crate::index::btree::split::split;
use crate::index::btree::traversal::{self, Iter};
use crate::index::btree::{check, delete, insert, Comparator, NaturalOrder, Node, TreeStats};

/// An in-memory B-tree of unique keys.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │                    BTree<K, C>                     │
/// │  root: Node<K>  ── replaced on growth / collapse   │
/// │  cmp:  C        ── strict total order over K       │
/// │  stats          ── splits / merges / rotations     │
/// └────────────────────────────────────────────────────┘
///        insert ──▶ split full nodes on the way down
///        delete ──▶ fill minimal children on the way down
/// ```
///
/// # Duplicates
/// Keys are unique. Inserting a key that compares equal to a stored key
/// returns `Error::DuplicateKey` and leaves the tree unchanged.
///
/// # Verification
/// [`TreeConfig::verify_invariants`] runs [`BTree::validate`] after every
/// successful insert and delete. It is off by default because each check
/// visits every node, turning mutations into `O(n)` work.
///
/// # Thread Safety
/// `BTree` is single-threaded. Wrap it in a
/// [`SharedBTree`](crate::index::SharedBTree) to share it between threads.
///
/// # Usage
/// ```
/// use nbtree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for k in [10, 20, 30, 40] {
///     tree.insert(k).unwrap();
/// }
/// assert_eq!(tree.root().keys().len(), 1);
/// assert_eq!(tree.delete(&20).unwrap(), 20);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 30, 40]);
/// ```
pub struct BTree<K, C = NaturalOrder> {
    /// Root node (exclusively owned).
    root: Node<K>,

    /// Key ordering.
    cmp: C,

    /// Construction settings (immutable after construction).
    config: TreeConfig,

    /// Number of stored keys.
    len: usize,

    /// Structural statistics.
    stats: TreeStats,
}

impl<K: Ord> BTree<K, NaturalOrder> {
    /// Create an empty tree of minimum degree `t` ordered by `Ord`.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if `min_degree < 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        Self::with_config(TreeConfig::new(min_degree), NaturalOrder)
    }

    /// Build a tree by inserting `keys` in iteration order.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `min_degree < 2`
    /// - `Error::DuplicateKey` if `keys` repeats a key
    pub fn from_keys<I>(min_degree: usize, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(min_degree)?;
        tree.extend_from(keys)?;
        Ok(tree)
    }
}

impl<K, C: Comparator<K>> BTree<K, C> {
    /// Create an empty tree ordered by `cmp`.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if `min_degree < 2`.
    pub fn with_comparator(min_degree: usize, cmp: C) -> Result<Self> {
        Self::with_config(TreeConfig::new(min_degree), cmp)
    }

    /// Create an empty tree from explicit settings.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if the configured degree is out of range.
    pub fn with_config(config: TreeConfig, cmp: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: Node::new_leaf(config.min_degree()),
            cmp,
            config,
            len: 0,
            stats: TreeStats::new(),
        })
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Find the node and position holding `key`.
    ///
    /// Returns `None` if the key is absent.
    pub fn search(&self, key: &K) -> Option<Loc<'_, K>> {
        let loc = locator::locate(&self.root, key, &self.cmp);
        loc.is_found().then_some(loc)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.search(key).and_then(|loc| loc.key())
    }

    /// The key that would replace `key` if it were removed from an internal
    /// node: its in-order predecessor, or `key` itself when it sits in a leaf.
    ///
    /// # Errors
    /// Returns `Error::KeyNotFound` if `key` is absent.
    pub fn predecessor(&self, key: &K) -> Result<&K> {
        let loc = locator::inorder_predecessor(&self.root, key, &self.cmp)?;
        loc.key().ok_or(Error::KeyNotFound)
    }

    /// Mirror of [`predecessor`](Self::predecessor) using the in-order successor.
    ///
    /// # Errors
    /// Returns `Error::KeyNotFound` if `key` is absent.
    pub fn successor(&self, key: &K) -> Result<&K> {
        let loc = locator::inorder_successor(&self.root, key, &self.cmp)?;
        loc.key().ok_or(Error::KeyNotFound)
    }

    /// Smallest stored key.
    pub fn min(&self) -> Option<&K> {
        let mut node = &self.root;
        while let Some(child) = node.child(0) {
            node = child;
        }
        node.keys().first()
    }

    /// Largest stored key.
    pub fn max(&self) -> Option<&K> {
        let mut node = &self.root;
        while let Some(child) = node.child(node.len()) {
            node = child;
        }
        node.keys().last()
    }

    // ========================================================================
    // Public API: Mutation
    // ========================================================================

    /// Insert `key`.
    ///
    /// A full root is split first, adding one level above it.
    ///
    /// # Errors
    /// Returns `Error::DuplicateKey` (tree unchanged) if `key` is present.
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            return Err(Error::DuplicateKey);
        }

        if self.root.is_full() {
            self.grow_root()?;
        }
        insert::insert_non_full(&mut self.root, key, &self.cmp, &self.stats)?;
        self.len += 1;

        self.verify()
    }

    /// Remove `key`, returning the stored key.
    ///
    /// An internal root left without keys is replaced by its only child,
    /// removing one level.
    ///
    /// # Errors
    /// Returns `Error::KeyNotFound` (tree unchanged) if `key` is absent.
    pub fn delete(&mut self, key: &K) -> Result<K> {
        if !self.contains(key) {
            return Err(Error::KeyNotFound);
        }

        let removed = delete::delete(&mut self.root, key, &self.cmp, &self.stats)?;
        self.len -= 1;

        if self.root.is_empty() && !self.root.is_leaf() {
            self.collapse_root()?;
        }

        self.verify()?;
        Ok(removed)
    }

    /// Insert every key from `keys`, stopping at the first failure.
    pub fn extend_from<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key)?;
        }
        Ok(())
    }

    /// Remove all keys, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(self.config.min_degree());
        self.len = 0;
    }

    // ========================================================================
    // Public API: Traversal
    // ========================================================================

    /// Visit keys node by node: a node's keys, then its subtrees.
    ///
    /// Deterministic, but not sorted.
    pub fn preorder<F: FnMut(&K)>(&self, mut visit: F) {
        traversal::preorder(&self.root, &mut visit);
    }

    /// Visit keys in increasing order.
    pub fn inorder<F: FnMut(&K)>(&self, mut visit: F) {
        traversal::inorder(&self.root, &mut visit);
    }

    /// Iterate keys in increasing order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len)
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn min_degree(&self) -> usize {
        self.config.min_degree()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Number of levels (a lone leaf root is height 1).
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.child(0) {
            node = child;
            height += 1;
        }
        height
    }

    /// Check every structural invariant.
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` describing the first broken rule,
    /// including a key count that disagrees with [`len`](Self::len).
    pub fn validate(&self) -> Result<()> {
        let counted = check::validate(&self.root, self.config.min_degree(), &self.cmp)?;
        if counted != self.len {
            return Err(Error::invariant(format!(
                "tree reports {} keys but holds {}",
                self.len, counted
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Internal: Root replacement
    // ========================================================================

    /// Split the full root under a new one-key root.
    fn grow_root(&mut self) -> Result<()> {
        let old_root = std::mem::replace(&mut self.root, Node::new_leaf(self.config.min_degree()));
        self.root = split(old_root)?.into_parent()?;

        TreeStats::bump(&self.stats.splits);
        TreeStats::bump(&self.stats.root_splits);
        debug!(height = self.height(), "root split, tree grew");
        Ok(())
    }

    /// Replace an empty internal root with its only child.
    fn collapse_root(&mut self) -> Result<()> {
        let child = self
            .root
            .children
            .pop_front()
            .ok_or_else(|| Error::invariant("empty internal root has no child"))?;
        if !self.root.children.is_empty() {
            return Err(Error::invariant("empty root has more than one child"));
        }
        self.root = *child;

        TreeStats::bump(&self.stats.root_collapses);
        debug!(height = self.height(), "root collapsed, tree shrank");
        Ok(())
    }

    fn verify(&self) -> Result<()> {
        if !self.config.verifies_invariants() {
            return Ok(());
        }
        self.validate().map_err(|e| {
            warn!(error = %e, "invariant check failed after mutation");
            e
        })
    }
}

impl<'a, K, C: Comparator<K>> IntoIterator for &'a BTree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K: fmt::Debug, C> fmt::Debug for BTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BTree")
            .field("min_degree", &self.config.min_degree())
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
