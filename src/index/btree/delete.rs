//! Single-pass, top-down deletion.
//!
//! Before the walk enters a child it makes sure that child holds at least
//! `t` keys, borrowing from a sibling or merging with one. Removing a key
//! at the bottom can then never underflow a node, so nothing has to be
//! repaired on the way back up.
//!
//! # Cases
//! ```text
//! key in leaf ................................. remove it
//! key in internal node, left child spare ...... replace with predecessor
//! key in internal node, right child spare ..... replace with successor
//! key in internal node, neither spare ......... merge around key, descend
//! key below, child at minimum, left spare ..... rotate from left sibling
//! key below, child at minimum, right spare .... rotate from right sibling
//! key below, child at minimum, none spare ..... merge with a sibling
//! ```
//! Merging under the root can leave the root empty; the façade then
//! replaces it with its only child.

use tracing::trace;

use crate::common::{Error, Result};
use crate::index::btree::{Comparator, Node, TreeStats};
use crate::sequence::Position;

/// Remove `key` from the subtree rooted at `node`, returning the stored key.
///
/// `node` must be the root or hold at least `t` keys.
///
/// # Errors
/// Returns `Error::KeyNotFound` if the key is absent. Callers that need the
/// tree left untouched on a miss must check membership first, since fix-ups
/// along the path are applied before the miss is discovered.
pub(crate) fn delete<K, C: Comparator<K>>(
    node: &mut Node<K>,
    key: &K,
    cmp: &C,
    stats: &TreeStats,
) -> Result<K> {
    match node.position(key, cmp) {
        Position::Found(index) if node.is_leaf() => node
            .keys
            .remove_at(index)
            .ok_or_else(|| Error::invariant("located key vanished from leaf")),
        Position::Vacant(_) if node.is_leaf() => Err(Error::KeyNotFound),
        Position::Found(index) => delete_from_internal(node, index, key, cmp, stats),
        Position::Vacant(index) => {
            let target = fill_child(node, index, stats)?;
            delete(node.child_mut(target)?, key, cmp, stats)
        }
    }
}

/// `key` sits at `keys[index]` of the internal `node`.
fn delete_from_internal<K, C: Comparator<K>>(
    node: &mut Node<K>,
    index: usize,
    key: &K,
    cmp: &C,
    stats: &TreeStats,
) -> Result<K> {
    if node.try_child(index)?.has_spare_key() {
        let predecessor = remove_max(node.child_mut(index)?, stats)?;
        return node.keys.set(index, predecessor);
    }

    if node.try_child(index + 1)?.has_spare_key() {
        let successor = remove_min(node.child_mut(index + 1)?, stats)?;
        return node.keys.set(index, successor);
    }

    // Both neighbours at minimum: pull the key down into the merged child.
    merge_children(node, index, stats)?;
    delete(node.child_mut(index)?, key, cmp, stats)
}

/// Remove and return the largest key of the subtree (its rightmost leaf key).
fn remove_max<K>(node: &mut Node<K>, stats: &TreeStats) -> Result<K> {
    if node.is_leaf() {
        return node
            .keys
            .pop_back()
            .ok_or_else(|| Error::invariant("predecessor leaf is empty"));
    }
    let last = node.children.len().saturating_sub(1);
    let target = fill_child(node, last, stats)?;
    remove_max(node.child_mut(target)?, stats)
}

/// Remove and return the smallest key of the subtree (its leftmost leaf key).
fn remove_min<K>(node: &mut Node<K>, stats: &TreeStats) -> Result<K> {
    if node.is_leaf() {
        return node
            .keys
            .pop_front()
            .ok_or_else(|| Error::invariant("successor leaf is empty"));
    }
    let target = fill_child(node, 0, stats)?;
    remove_min(node.child_mut(target)?, stats)
}

/// Make sure `children[index]` holds at least `t` keys before descending.
///
/// Returns the index of the child to descend into, which moves one slot
/// left when the child is merged into its left sibling.
fn fill_child<K>(node: &mut Node<K>, index: usize, stats: &TreeStats) -> Result<usize> {
    if node.try_child(index)?.has_spare_key() {
        return Ok(index);
    }

    let has_left = index > 0;
    let has_right = index + 1 < node.children.len();

    if has_left && node.try_child(index - 1)?.has_spare_key() {
        borrow_from_left(node, index, stats)?;
        return Ok(index);
    }

    if has_right && node.try_child(index + 1)?.has_spare_key() {
        borrow_from_right(node, index, stats)?;
        return Ok(index);
    }

    if has_right {
        merge_children(node, index, stats)?;
        Ok(index)
    } else if has_left {
        merge_children(node, index - 1, stats)?;
        Ok(index - 1)
    } else {
        Err(Error::invariant(format!(
            "child {} of internal node has no siblings",
            index
        )))
    }
}

/// Rotate right: the left sibling's last key moves up, the separator moves
/// down to the front of `children[index]`.
fn borrow_from_left<K>(node: &mut Node<K>, index: usize, stats: &TreeStats) -> Result<()> {
    let (donated_key, donated_child) = {
        let sibling = node.child_mut(index - 1)?;
        let key = sibling
            .keys
            .pop_back()
            .ok_or_else(|| Error::invariant("left sibling has no key to lend"))?;
        let child = if sibling.is_leaf() {
            None
        } else {
            Some(
                sibling
                    .children
                    .pop_back()
                    .ok_or_else(|| Error::invariant("left sibling has no child to lend"))?,
            )
        };
        (key, child)
    };

    let separator = node.keys.set(index - 1, donated_key)?;
    let receiver = node.child_mut(index)?;
    receiver.keys.push_front(separator)?;
    if let Some(child) = donated_child {
        receiver.children.push_front(child)?;
    }

    TreeStats::bump(&stats.rotations);
    trace!(index, "borrowed key from left sibling");
    Ok(())
}

/// Rotate left: the right sibling's first key moves up, the separator moves
/// down to the back of `children[index]`.
fn borrow_from_right<K>(node: &mut Node<K>, index: usize, stats: &TreeStats) -> Result<()> {
    let (donated_key, donated_child) = {
        let sibling = node.child_mut(index + 1)?;
        let key = sibling
            .keys
            .pop_front()
            .ok_or_else(|| Error::invariant("right sibling has no key to lend"))?;
        let child = if sibling.is_leaf() {
            None
        } else {
            Some(
                sibling
                    .children
                    .pop_front()
                    .ok_or_else(|| Error::invariant("right sibling has no child to lend"))?,
            )
        };
        (key, child)
    };

    let separator = node.keys.set(index, donated_key)?;
    let receiver = node.child_mut(index)?;
    receiver.keys.push_back(separator)?;
    if let Some(child) = donated_child {
        receiver.children.push_back(child)?;
    }

    TreeStats::bump(&stats.rotations);
    trace!(index, "borrowed key from right sibling");
    Ok(())
}

/// Merge `children[index]`, `keys[index]` and `children[index + 1]` into
/// `children[index]`. The right child is consumed.
fn merge_children<K>(node: &mut Node<K>, index: usize, stats: &TreeStats) -> Result<()> {
    let right = node
        .children
        .remove_at(index + 1)
        .ok_or_else(|| Error::invariant(format!("no right child {} to merge", index + 1)))?;
    let separator = node
        .keys
        .remove_at(index)
        .ok_or_else(|| Error::invariant(format!("no separator {} to merge around", index)))?;

    node.child_mut(index)?.absorb(separator, *right)?;

    TreeStats::bump(&stats.merges);
    trace!(index, remaining = node.len(), "merged children");
    Ok(())
}
