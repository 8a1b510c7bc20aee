//! Top-down insertion.
//!
//! Full children are split before the walk enters them, so every node the
//! walk reaches has room for one more key and splits never propagate upward.

use tracing::trace;

use crate::common::{Error, Result};
use crate::index::btree::split::split;
use crate::index::btree::{Comparator, Node, TreeStats};
use crate::sequence::Position;

/// Insert `key` into the subtree rooted at the non-full `node`.
///
/// # Errors
/// Returns `Error::DuplicateKey` if the walk meets an equal key.
pub(crate) fn insert_non_full<K, C: Comparator<K>>(
    node: &mut Node<K>,
    key: K,
    cmp: &C,
    stats: &TreeStats,
) -> Result<()> {
    let index = match node.position(&key, cmp) {
        Position::Found(_) => return Err(Error::DuplicateKey),
        Position::Vacant(i) => i,
    };

    if node.is_leaf() {
        return node.keys.insert_at(index, key);
    }

    if node.try_child(index)?.is_full() {
        split_child(node, index, stats)?;
        // The key now belongs to one of the two halves; re-locate from here.
        return insert_non_full(node, key, cmp, stats);
    }

    insert_non_full(node.child_mut(index)?, key, cmp, stats)
}

/// Split the full child at `index`, hoisting its median into `parent`.
///
/// `parent` must not be full.
pub(crate) fn split_child<K>(parent: &mut Node<K>, index: usize, stats: &TreeStats) -> Result<()> {
    if parent.is_full() {
        return Err(Error::invariant("split_child into a full parent"));
    }

    let full = parent
        .child(index)
        .ok_or_else(|| Error::invariant(format!("no child {} to split", index)))?
        .is_full();
    if !full {
        return Err(Error::invariant(format!("child {} is not full", index)));
    }

    let child = parent
        .children
        .remove_at(index)
        .ok_or_else(|| Error::invariant(format!("no child {} to split", index)))?;
    let pair = split(*child)?;

    parent.keys.insert_at(index, pair.promoted)?;
    parent.children.insert_at(index, Box::new(pair.left))?;
    parent.children.insert_at(index + 1, Box::new(pair.right))?;

    TreeStats::bump(&stats.splits);
    trace!(index, "split child");
    Ok(())
}
