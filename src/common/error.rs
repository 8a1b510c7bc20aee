//! Error types for nbtree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the tree and its building blocks.
///
/// Every failure is returned to the caller. Nothing is retried internally
/// and nothing aborts the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tree was constructed with a minimum degree below 2.
    #[error("Invalid minimum degree {0}: must be at least 2")]
    InvalidOrder(usize),

    /// The key is not present in the tree.
    #[error("Key not found")]
    KeyNotFound,

    /// The key is already present in the tree.
    ///
    /// Keys are unique; inserting an existing key is rejected.
    #[error("Key already exists")]
    DuplicateKey,

    /// A structural check failed.
    ///
    /// This indicates a bug, not a normal runtime condition.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A bounded sequence was asked to grow past its capacity.
    ///
    /// Nodes are sized so this never happens in a correct tree.
    #[error("Sequence capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

impl Error {
    /// Build an [`Error::InvariantViolation`] from anything printable.
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}
