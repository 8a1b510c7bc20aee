//! Key ordering capability.

use std::cmp::Ordering;

/// A strict total order over keys.
///
/// The tree holds one comparator for its whole lifetime, so the order
/// must stay consistent across every key ever inserted.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator:
/// ```
/// use nbtree::BTree;
///
/// // Descending order
/// let mut tree = BTree::with_comparator(2, |a: &i32, b: &i32| b.cmp(a)).unwrap();
/// for k in [1, 2, 3] {
///     tree.insert(k).unwrap();
/// }
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub trait Comparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
