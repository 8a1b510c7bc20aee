//! Splitting full nodes.

use tracing::trace;

use crate::common::{Error, Result};
use crate::index::btree::Node;

/// Output of [`split`]: two half-full nodes and the key promoted between them.
#[derive(Debug)]
pub(crate) struct NodePair<K> {
    pub(crate) left: Node<K>,
    pub(crate) right: Node<K>,
    pub(crate) promoted: K,
}

impl<K> NodePair<K> {
    /// Build a one-key internal node over the pair (a new root).
    pub(crate) fn into_parent(self) -> Result<Node<K>> {
        let mut parent = Node::empty(false, self.left.min_degree());
        parent.keys.push_back(self.promoted)?;
        parent.children.push_back(Box::new(self.left))?;
        parent.children.push_back(Box::new(self.right))?;
        Ok(parent)
    }
}

/// Split a full node around its median key.
///
/// ```text
///   [ k0 .. k(t-2) | k(t-1) | k(t) .. k(2t-2) ]
///        left        promoted       right
/// ```
/// Both halves keep `t - 1` keys and the input's leaf/internal kind.
/// Internal nodes hand their first `t` children to the left half and
/// the remaining `t` to the right.
///
/// # Errors
/// Returns `Error::InvariantViolation` if `node` is not full.
pub(crate) fn split<K>(mut node: Node<K>) -> Result<NodePair<K>> {
    if !node.is_full() {
        return Err(Error::invariant(format!(
            "split of non-full node with {} keys",
            node.len()
        )));
    }

    let t = node.min_degree();
    let mut right = Node::empty(node.is_leaf(), t);
    right.keys = node.keys.split_off(t)?;
    if !node.is_leaf() {
        right.children = node.children.split_off(t)?;
    }

    let promoted = node
        .keys
        .pop_back()
        .ok_or_else(|| Error::invariant("split left half has no median"))?;

    trace!(min_degree = t, leaf = node.is_leaf(), "split full node");

    Ok(NodePair {
        left: node,
        right,
        promoted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(node: &Node<i32>) -> Vec<i32> {
        node.keys().iter().copied().collect()
    }

    fn leaf_with(min_degree: usize, keys: impl IntoIterator<Item = i32>) -> Node<i32> {
        let mut node = Node::new_leaf(min_degree);
        for k in keys {
            node.keys.push_back(k).unwrap();
        }
        node
    }

    #[test]
    fn test_split_leaf_degree_two() {
        let pair = split(leaf_with(2, [10, 20, 30])).unwrap();

        assert_eq!(pair.promoted, 20);
        assert_eq!(keys_of(&pair.left), vec![10]);
        assert_eq!(keys_of(&pair.right), vec![30]);
        assert!(pair.left.is_leaf() && pair.right.is_leaf());
    }

    #[test]
    fn test_split_leaf_degree_three() {
        let pair = split(leaf_with(3, 1..=5)).unwrap();

        assert_eq!(pair.promoted, 3);
        assert_eq!(keys_of(&pair.left), vec![1, 2]);
        assert_eq!(keys_of(&pair.right), vec![4, 5]);
        assert!(pair.left.at_minimum() && pair.right.at_minimum());
    }

    #[test]
    fn test_split_internal_partitions_children() {
        let mut node = Node::empty(false, 2);
        for k in [20, 40, 60] {
            node.keys.push_back(k).unwrap();
        }
        for base in [0, 30, 50, 70] {
            node.children.push_back(Box::new(leaf_with(2, [base + 1]))).unwrap();
        }

        let pair = split(node).unwrap();
        assert_eq!(pair.promoted, 40);
        assert!(!pair.left.is_leaf() && !pair.right.is_leaf());
        assert_eq!(pair.left.children().len(), 2);
        assert_eq!(pair.right.children().len(), 2);
        assert_eq!(pair.left.child(1).map(keys_of), Some(vec![31]));
        assert_eq!(pair.right.child(0).map(keys_of), Some(vec![51]));
    }

    #[test]
    fn test_split_non_full_rejected() {
        let result = split(leaf_with(2, [1, 2]));
        assert!(matches!(result, Err(Error::InvariantViolation(_))));
    }

    #[test]
    fn test_into_parent() {
        let parent = split(leaf_with(2, [1, 2, 3])).unwrap().into_parent().unwrap();
        assert!(!parent.is_leaf());
        assert_eq!(keys_of(&parent), vec![2]);
        assert_eq!(parent.children().len(), 2);
    }
}
