//! Structural statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for the rebalancing work a tree has performed.
///
/// All fields are atomic so they can be bumped through `&self`.
/// `Ordering::Relaxed` is enough: counters are independent and only
/// need to be eventually consistent.
///
/// # Example
/// ```
/// use nbtree::BTree;
///
/// let tree = BTree::from_keys(2, 1..=4).unwrap();
/// let snapshot = tree.stats().snapshot();
/// assert_eq!(snapshot.root_splits, 1);
/// ```
#[derive(Debug, Default)]
pub struct TreeStats {
    /// Full nodes split in two (root splits included).
    pub splits: AtomicU64,

    /// Splits of the root, each adding one level.
    pub root_splits: AtomicU64,

    /// Sibling pairs merged around a separator.
    pub merges: AtomicU64,

    /// Keys borrowed from a sibling through the parent.
    pub rotations: AtomicU64,

    /// Empty internal roots replaced by their only child.
    pub root_collapses: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            splits: self.splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            merges: self.merges.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            root_collapses: self.root_collapses.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.merges.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        self.root_collapses.store(0, Ordering::Relaxed);
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub splits: u64,
    pub root_splits: u64,
    pub merges: u64,
    pub rotations: u64,
    pub root_collapses: u64,
}

impl StatsSnapshot {
    /// Counter-wise difference `self - earlier`.
    ///
    /// Handy for checking what a single operation did.
    pub fn since(&self, earlier: &StatsSnapshot) -> StatsSnapshot {
        StatsSnapshot {
            splits: self.splits.saturating_sub(earlier.splits),
            root_splits: self.root_splits.saturating_sub(earlier.root_splits),
            merges: self.merges.saturating_sub(earlier.merges),
            rotations: self.rotations.saturating_sub(earlier.rotations),
            root_collapses: self.root_collapses.saturating_sub(earlier.root_collapses),
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {} (root: {}), merges: {}, rotations: {}, collapses: {} }}",
            self.splits, self.root_splits, self.merges, self.rotations, self.root_collapses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_bump_and_reset() {
        let stats = TreeStats::new();
        TreeStats::bump(&stats.splits);
        TreeStats::bump(&stats.splits);
        TreeStats::bump(&stats.rotations);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.splits, 2);
        assert_eq!(snapshot.rotations, 1);

        stats.reset();
        assert_eq!(stats.snapshot().splits, 0);
    }

    #[test]
    fn test_snapshot_since() {
        let stats = TreeStats::new();
        TreeStats::bump(&stats.merges);
        let before = stats.snapshot();

        TreeStats::bump(&stats.merges);
        TreeStats::bump(&stats.root_collapses);
        let delta = stats.snapshot().since(&before);

        assert_eq!(delta.merges, 1);
        assert_eq!(delta.root_collapses, 1);
        assert_eq!(delta.rotations, 0);
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats::new();
        TreeStats::bump(&stats.splits);
        TreeStats::bump(&stats.root_splits);
        TreeStats::bump(&stats.merges);

        let display = format!("{}", stats.snapshot());
        assert!(display.contains("splits: 1 (root: 1)"));
        assert!(display.contains("merges: 1"));
    }
}
