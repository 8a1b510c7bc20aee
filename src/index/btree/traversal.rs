//! Key enumeration.
//!
//! - [`preorder`] - a node's keys, then each child subtree (diagnostic order)
//! - [`inorder`] / [`Iter`] - every key exactly once, in sorted order

use crate::index::btree::Node;

/// Visit `node`'s keys in stored order, then recurse into each child.
///
/// The output is deterministic but not sorted: a parent's keys come
/// before every key of its subtrees.
pub fn preorder<K, F: FnMut(&K)>(node: &Node<K>, visit: &mut F) {
    for key in node.keys().iter() {
        visit(key);
    }
    for child in node.children().iter() {
        preorder(child, visit);
    }
}

/// Visit every key in increasing order.
///
/// Interleaves `children[0], keys[0], children[1], ..., children[last]`.
pub fn inorder<K, F: FnMut(&K)>(node: &Node<K>, visit: &mut F) {
    for (i, key) in node.keys().iter().enumerate() {
        if let Some(child) = node.child(i) {
            inorder(child, visit);
        }
        visit(key);
    }
    if let Some(last) = node.child(node.len()) {
        inorder(last, visit);
    }
}

/// In-order iterator over a tree's keys.
///
/// Keeps an explicit stack of `(node, next key index)` along the current
/// path, so each step is amortized O(1) and depth is bounded by the height.
pub struct Iter<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, node: &'a Node<K>) {
        let mut current = node;
        loop {
            self.stack.push((current, 0));
            match current.child(0) {
                Some(child) => current = child,
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            let top = self.stack.last_mut()?;
            let node: &'a Node<K> = top.0;
            let index = top.1;

            if index < node.len() {
                top.1 += 1;
                if let Some(child) = node.child(index + 1) {
                    self.push_left_spine(child);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return node.keys().get(index);
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::btree::BTree;

    #[test]
    fn test_preorder_small_tree() {
        // Root [20] over [10] and [30, 40]
        let tree = BTree::from_keys(2, [10, 20, 30, 40]).unwrap();
        let mut seen = Vec::new();
        preorder(tree.root(), &mut |k: &i32| seen.push(*k));
        assert_eq!(seen, vec![20, 10, 30, 40]);
    }

    #[test]
    fn test_inorder_sorted() {
        let tree = BTree::from_keys(2, [50, 10, 40, 20, 30, 60, 5]).unwrap();
        let mut seen = Vec::new();
        inorder(tree.root(), &mut |k: &i32| seen.push(*k));
        assert_eq!(seen, vec![5, 10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_traversals_visit_same_keys() {
        let tree = BTree::from_keys(3, (0..200).rev()).unwrap();

        let mut pre = Vec::new();
        preorder(tree.root(), &mut |k: &i32| pre.push(*k));
        pre.sort();

        let mut ino = Vec::new();
        inorder(tree.root(), &mut |k: &i32| ino.push(*k));

        assert_eq!(pre, ino);
        assert_eq!(ino, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_matches_inorder() {
        let tree = BTree::from_keys(2, (1..=57).map(|k| (k * 37) % 101)).unwrap();

        let mut expected = Vec::new();
        inorder(tree.root(), &mut |k: &i32| expected.push(*k));

        let iter = tree.iter();
        assert_eq!(iter.len(), 57);
        assert_eq!(iter.copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_iter_restartable() {
        let tree = BTree::from_keys(2, 1..=10).unwrap();
        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_traversals() {
        let tree: BTree<i32> = BTree::new(2).unwrap();
        let mut count = 0;
        preorder(tree.root(), &mut |_: &i32| count += 1);
        inorder(tree.root(), &mut |_: &i32| count += 1);
        assert_eq!(count, 0);
        assert_eq!(tree.iter().next(), None);
    }
}
