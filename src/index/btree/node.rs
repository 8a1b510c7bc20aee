//! B-tree node and fullness predicates.

use crate::common::config::{max_children, max_keys, min_keys};
use crate::common::{Error, Result};
use crate::index::btree::Comparator;
use crate::sequence::{OrderedSeq, Position};

/// A single B-tree node.
///
/// # Layout
/// ```text
///            keys:   [ k0 | k1 | k2 ]
///        children:  c0   c1   c2   c3
/// ```
/// Every key in `c_i` sorts below `k_i` and every key in `c_{i+1}` sorts
/// above it. Leaves have no children; an internal node with `k` keys has
/// exactly `k + 1`.
///
/// Key storage is bounded at `2t - 1` and child storage at `2t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// True if this node has no children.
    leaf: bool,

    /// Minimum degree `t` of the owning tree.
    min_degree: usize,

    /// Separator keys in increasing order.
    pub(crate) keys: OrderedSeq<K>,

    /// Owned subtrees (empty iff `leaf`).
    pub(crate) children: OrderedSeq<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub(crate) fn new_leaf(min_degree: usize) -> Self {
        Self::empty(true, min_degree)
    }

    /// Create an empty node with the given classification.
    pub(crate) fn empty(leaf: bool, min_degree: usize) -> Self {
        Self {
            leaf,
            min_degree,
            keys: OrderedSeq::with_capacity(max_keys(min_degree)),
            children: OrderedSeq::with_capacity(max_children(min_degree)),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Keys stored in this node, in increasing order.
    #[inline]
    pub fn keys(&self) -> &OrderedSeq<K> {
        &self.keys
    }

    /// Child subtrees, left to right.
    #[inline]
    pub fn children(&self) -> &OrderedSeq<Box<Node<K>>> {
        &self.children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Node<K>> {
        self.children.get(index).map(|c| &**c)
    }

    /// Number of keys held by this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // ========================================================================
    // Fullness predicates
    // ========================================================================

    /// `|keys| == 2t - 1`: must be split before anything descends into it.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.keys.len() == max_keys(self.min_degree)
    }

    /// `|keys| >= t`: can donate one key without underflowing.
    #[inline]
    pub fn has_spare_key(&self) -> bool {
        self.keys.len() >= self.min_degree
    }

    /// `|keys| == t - 1`: the smallest legal size for a non-root node.
    #[inline]
    pub fn at_minimum(&self) -> bool {
        self.keys.len() == min_keys(self.min_degree)
    }

    // ========================================================================
    // Crate-internal helpers used by insert/delete
    // ========================================================================

    /// Locate `key` among this node's keys.
    #[inline]
    pub(crate) fn position<C: Comparator<K>>(&self, key: &K, cmp: &C) -> Position {
        self.keys.locate_by(|probe| cmp.compare(probe, key))
    }

    /// Child at `index`, or an invariant error if it is missing.
    pub(crate) fn try_child(&self, index: usize) -> Result<&Node<K>> {
        self.child(index).ok_or_else(|| {
            Error::invariant(format!(
                "missing child {} of node with {} children",
                index,
                self.children.len()
            ))
        })
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Result<&mut Node<K>> {
        let count = self.children.len();
        self.children
            .get_mut(index)
            .map(|c| &mut **c)
            .ok_or_else(|| {
                Error::invariant(format!(
                    "missing child {} of node with {} children",
                    index, count
                ))
            })
    }

    /// Splice `separator` and all of `right` onto the end of this node.
    ///
    /// `right` is consumed; its keys (and children, if internal) now live here.
    pub(crate) fn absorb(&mut self, separator: K, right: Node<K>) -> Result<()> {
        if self.leaf != right.leaf {
            return Err(Error::invariant("merging a leaf with an internal node"));
        }
        self.keys.push_back(separator)?;
        self.keys.append(right.keys)?;
        if !self.leaf {
            self.children.append(right.children)?;
        }
        Ok(())
    }
}
