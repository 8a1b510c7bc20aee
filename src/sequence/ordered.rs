//! Capacity-bounded ordered sequence.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::common::{Error, Result};

/// Outcome of [`OrderedSeq::locate_by`].
///
/// The index is always the smallest `i` with `target <= seq[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// `seq[i] == target`.
    Found(usize),

    /// `target` is absent; inserting it at `i` keeps the sequence sorted.
    Vacant(usize),
}

impl Position {
    /// The index carried by either variant.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Position::Found(i) | Position::Vacant(i) => i,
        }
    }

    /// True for an exact match.
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Position::Found(_))
    }
}

/// A double-ended sequence that never holds more than `capacity` items.
///
/// Growth past the capacity is reported as `Error::CapacityExceeded`
/// rather than reallocating, so an overfull node surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSeq<T> {
    /// Items in order (front = index 0).
    items: VecDeque<T>,

    /// Maximum number of items (immutable after construction).
    capacity: usize,
}

impl<T> OrderedSeq<T> {
    /// Create an empty sequence bounded by `capacity`.
    ///
    /// The bound is logical. Storage grows as items arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when no further item can be added.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the item at `index`, returning the previous one.
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` if `index` is out of range.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::invariant(format!("set at {} in sequence of {}", index, len)))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Insert `value` at `index`, shifting later items right.
    ///
    /// # Errors
    /// - `Error::CapacityExceeded` if the sequence is full
    /// - `Error::InvariantViolation` if `index > len`
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.ensure_room(1)?;
        if index > self.items.len() {
            return Err(Error::invariant(format!(
                "insert at {} in sequence of {}",
                index,
                self.items.len()
            )));
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove and return the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.items.remove(index)
    }

    /// Append to the back.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.ensure_room(1)?;
        self.items.push_back(value);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Prepend to the front in O(1).
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.ensure_room(1)?;
        self.items.push_front(value);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Split off `[at, len)` into a new sequence with the same capacity.
    ///
    /// # Errors
    /// Returns `Error::InvariantViolation` if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Result<Self> {
        if at > self.items.len() {
            return Err(Error::invariant(format!(
                "split at {} in sequence of {}",
                at,
                self.items.len()
            )));
        }
        Ok(Self {
            items: self.items.split_off(at),
            capacity: self.capacity,
        })
    }

    /// Concatenate `other` onto the back of `self`, consuming it.
    ///
    /// # Errors
    /// Returns `Error::CapacityExceeded` (leaving `self` untouched) if the
    /// combined length would not fit.
    pub fn append(&mut self, mut other: Self) -> Result<()> {
        self.ensure_room(other.items.len())?;
        self.items.append(&mut other.items);
        Ok(())
    }

    /// Find `target` using `cmp(item, target)`.
    ///
    /// The sequence must be sorted under `cmp`. Returns the smallest index
    /// `i` such that `target <= seq[i]`, tagged by whether it matched.
    pub fn locate_by<F>(&self, mut cmp: F) -> Position
    where
        F: FnMut(&T) -> Ordering,
    {
        let index = self.items.partition_point(|item| cmp(item) == Ordering::Less);
        match self.items.get(index) {
            Some(item) if cmp(item) == Ordering::Equal => Position::Found(index),
            _ => Position::Vacant(index),
        }
    }

    fn ensure_room(&self, extra: usize) -> Result<()> {
        if self.items.len() + extra > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_of(capacity: usize, values: &[i32]) -> OrderedSeq<i32> {
        let mut seq = OrderedSeq::with_capacity(capacity);
        for &v in values {
            seq.push_back(v).unwrap();
        }
        seq
    }

    fn to_vec(seq: &OrderedSeq<i32>) -> Vec<i32> {
        seq.iter().copied().collect()
    }

    #[test]
    fn test_push_pop_both_ends() {
        let mut seq = OrderedSeq::with_capacity(4);
        seq.push_back(2).unwrap();
        seq.push_back(3).unwrap();
        seq.push_front(1).unwrap();

        assert_eq!(to_vec(&seq), vec![1, 2, 3]);
        assert_eq!(seq.pop_front(), Some(1));
        assert_eq!(seq.pop_back(), Some(3));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_capacity_enforced() {
        let mut seq = seq_of(2, &[1, 2]);
        assert!(seq.is_full());

        assert_eq!(seq.push_back(3), Err(Error::CapacityExceeded { capacity: 2 }));
        assert_eq!(seq.push_front(0), Err(Error::CapacityExceeded { capacity: 2 }));
        assert_eq!(seq.insert_at(1, 9), Err(Error::CapacityExceeded { capacity: 2 }));

        // Failures don't modify the sequence
        assert_eq!(to_vec(&seq), vec![1, 2]);
    }

    #[test]
    fn test_insert_remove_set() {
        let mut seq = seq_of(5, &[10, 30]);
        seq.insert_at(1, 20).unwrap();
        assert_eq!(to_vec(&seq), vec![10, 20, 30]);

        assert_eq!(seq.set(0, 5).unwrap(), 10);
        assert_eq!(seq.remove_at(2), Some(30));
        assert_eq!(seq.remove_at(7), None);
        assert_eq!(to_vec(&seq), vec![5, 20]);

        assert!(matches!(seq.set(9, 1), Err(Error::InvariantViolation(_))));
        assert!(matches!(seq.insert_at(5, 1), Err(Error::InvariantViolation(_))));
    }

    #[test]
    fn test_split_off_and_append() {
        let mut left = seq_of(5, &[1, 2, 3, 4, 5]);
        let right = left.split_off(2).unwrap();

        assert_eq!(to_vec(&left), vec![1, 2]);
        assert_eq!(to_vec(&right), vec![3, 4, 5]);
        assert_eq!(right.capacity(), 5);

        left.append(right).unwrap();
        assert_eq!(to_vec(&left), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_overflow_leaves_target_intact() {
        let mut left = seq_of(3, &[1, 2]);
        let right = seq_of(3, &[3, 4]);

        assert!(left.append(right).is_err());
        assert_eq!(to_vec(&left), vec![1, 2]);
    }

    #[test]
    fn test_locate() {
        let seq = seq_of(5, &[10, 20, 30]);

        assert_eq!(seq.locate_by(|k| k.cmp(&20)), Position::Found(1));
        assert_eq!(seq.locate_by(|k| k.cmp(&5)), Position::Vacant(0));
        assert_eq!(seq.locate_by(|k| k.cmp(&25)), Position::Vacant(2));
        assert_eq!(seq.locate_by(|k| k.cmp(&99)), Position::Vacant(3));

        let empty: OrderedSeq<i32> = OrderedSeq::with_capacity(3);
        assert_eq!(empty.locate_by(|k| k.cmp(&1)), Position::Vacant(0));
    }

    #[test]
    fn test_large_bound_allocates_lazily() {
        let mut seq: OrderedSeq<u64> = OrderedSeq::with_capacity(usize::MAX - 1);
        assert_eq!(seq.capacity(), usize::MAX - 1);
        assert!(!seq.is_full());

        seq.push_back(7).unwrap();
        assert_eq!(seq.first(), Some(&7));
    }

    #[test]
    fn test_position_accessors() {
        assert_eq!(Position::Found(3).index(), 3);
        assert_eq!(Position::Vacant(4).index(), 4);
        assert!(Position::Found(0).is_found());
        assert!(!Position::Vacant(0).is_found());
    }
}
