//! Structural invariant validation.
//!
//! Checks, for every node:
//! - key count within `[t - 1, 2t - 1]` (root: `[0, 2t - 1]`)
//! - leaves have no children, internal nodes have `keys + 1`
//! - keys strictly increasing and inside the bounds set by ancestors
//! - every leaf at the same depth

use std::cmp::Ordering;

use crate::common::config::{max_keys, min_keys};
use crate::common::{Error, Result};
use crate::index::btree::{Comparator, Node};

/// Validate the subtree rooted at `root` and return its key count.
///
/// # Errors
/// Returns `Error::InvariantViolation` describing the first broken rule.
pub(crate) fn validate<K, C: Comparator<K>>(
    root: &Node<K>,
    min_degree: usize,
    cmp: &C,
) -> Result<usize> {
    let mut checker = Checker {
        min_degree,
        cmp,
        leaf_depth: None,
    };
    checker.node(root, 0, None, None)
}

struct Checker<'c, C> {
    min_degree: usize,
    cmp: &'c C,
    leaf_depth: Option<usize>,
}

impl<C> Checker<'_, C> {
    fn node<K>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<usize>
    where
        C: Comparator<K>,
    {
        let t = self.min_degree;
        if node.min_degree() != t {
            return Err(Error::invariant(format!(
                "node at depth {} has degree {}, tree has {}",
                depth,
                node.min_degree(),
                t
            )));
        }

        let count = node.len();
        let floor = if depth == 0 { 0 } else { min_keys(t) };
        if count < floor || count > max_keys(t) {
            return Err(Error::invariant(format!(
                "node at depth {} holds {} keys, allowed {}..={}",
                depth,
                count,
                floor,
                max_keys(t)
            )));
        }

        self.keys_ordered(node, depth, lower, upper)?;

        if node.is_leaf() {
            if !node.children().is_empty() {
                return Err(Error::invariant(format!(
                    "leaf at depth {} has {} children",
                    depth,
                    node.children().len()
                )));
            }
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(count)
                }
                Some(expected) if expected == depth => Ok(count),
                Some(expected) => Err(Error::invariant(format!(
                    "leaf at depth {}, expected {}",
                    depth, expected
                ))),
            };
        }

        if node.children().len() != count + 1 {
            return Err(Error::invariant(format!(
                "internal node at depth {} has {} keys but {} children",
                depth,
                count,
                node.children().len()
            )));
        }
        if depth > 0 && count == 0 {
            return Err(Error::invariant("empty internal node below the root"));
        }

        let mut total = count;
        for (i, child) in node.children().iter().enumerate() {
            let lo = if i == 0 { lower } else { node.keys().get(i - 1) };
            let hi = if i == count { upper } else { node.keys().get(i) };
            total += self.node(child, depth + 1, lo, hi)?;
        }
        Ok(total)
    }

    fn keys_ordered<K>(
        &self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<()>
    where
        C: Comparator<K>,
    {
        let mut previous = lower;
        for (i, key) in node.keys().iter().enumerate() {
            if let Some(prev) = previous {
                if self.cmp.compare(prev, key) != Ordering::Less {
                    return Err(Error::invariant(format!(
                        "key {} at depth {} is out of order",
                        i, depth
                    )));
                }
            }
            previous = Some(key);
        }
        if let (Some(last), Some(hi)) = (previous, upper) {
            if self.cmp.compare(last, hi) != Ordering::Less {
                return Err(Error::invariant(format!(
                    "keys at depth {} exceed their upper separator",
                    depth
                )));
            }
        }
        Ok(())
    }
}
