//! Configuration for nbtree.
//!
//! A B-tree of minimum degree `t` bounds every node's key count:
//! - Non-root nodes: `t - 1 ..= 2t - 1` keys
//! - Root: `0 ..= 2t - 1` keys
//! - Internal nodes with `k` keys have exactly `k + 1` children

use crate::common::{Error, Result};

/// Smallest legal minimum degree.
///
/// With `t = 2` every node holds 1 to 3 keys (a 2-3-4 tree).
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Largest legal minimum degree.
///
/// Bounded so that `2t` children still fit in a `usize`.
pub const MAX_MIN_DEGREE: usize = usize::MAX / 2;

/// Minimum degree used by [`TreeConfig::default`].
pub const DEFAULT_MIN_DEGREE: usize = 3;

/// Maximum number of keys a node of degree `t` may hold.
#[inline]
pub const fn max_keys(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Maximum number of children an internal node of degree `t` may hold.
#[inline]
pub const fn max_children(min_degree: usize) -> usize {
    2 * min_degree
}

/// Minimum number of keys a non-root node of degree `t` must hold.
#[inline]
pub const fn min_keys(min_degree: usize) -> usize {
    min_degree - 1
}

/// Construction-time settings for a [`BTree`](crate::BTree).
///
/// # Example
/// ```
/// use nbtree::TreeConfig;
///
/// let config = TreeConfig::new(4).verify_invariants(true);
/// assert_eq!(config.min_degree(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    min_degree: usize,
    verify_invariants: bool,
}

impl TreeConfig {
    /// Create a config with the given minimum degree.
    ///
    /// Invariant verification is off. Enabling it makes every insert and
    /// delete walk the whole tree.
    pub fn new(min_degree: usize) -> Self {
        Self {
            min_degree,
            verify_invariants: false,
        }
    }

    /// Run the full invariant check after every successful mutation.
    pub fn verify_invariants(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }

    /// The configured minimum degree `t`.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Whether mutations are followed by an invariant check.
    #[inline]
    pub fn verifies_invariants(&self) -> bool {
        self.verify_invariants
    }

    /// Check that the settings describe a legal tree.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if `min_degree` is below
    /// [`MIN_DEGREE_FLOOR`] or above [`MAX_MIN_DEGREE`].
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DEGREE_FLOOR..=MAX_MIN_DEGREE).contains(&self.min_degree) {
            return Err(Error::InvalidOrder(self.min_degree));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DEGREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_for_degree_two() {
        assert_eq!(max_keys(2), 3);
        assert_eq!(max_children(2), 4);
        assert_eq!(min_keys(2), 1);
    }

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert_eq!(config.min_degree(), DEFAULT_MIN_DEGREE);
        assert!(!config.verifies_invariants());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_degree_rejected() {
        assert_eq!(TreeConfig::new(0).validate(), Err(Error::InvalidOrder(0)));
        assert_eq!(TreeConfig::new(1).validate(), Err(Error::InvalidOrder(1)));
        assert!(TreeConfig::new(MIN_DEGREE_FLOOR).validate().is_ok());
    }

    #[test]
    fn test_oversized_degree_rejected() {
        let too_big = MAX_MIN_DEGREE + 1;
        assert_eq!(
            TreeConfig::new(too_big).validate(),
            Err(Error::InvalidOrder(too_big))
        );
        assert_eq!(
            TreeConfig::new(usize::MAX).validate(),
            Err(Error::InvalidOrder(usize::MAX))
        );
        assert!(TreeConfig::new(MAX_MIN_DEGREE).validate().is_ok());
        assert_eq!(max_children(MAX_MIN_DEGREE), usize::MAX - 1);
    }

    #[test]
    fn test_verify_toggle() {
        let config = TreeConfig::new(2).verify_invariants(false);
        assert!(!config.verifies_invariants());
    }
}
