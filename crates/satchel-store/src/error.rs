//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// All of them are expected, recoverable conditions. None leaves the
/// store modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An item with this name is already stored.
    #[error("an item named {0:?} already exists")]
    DuplicateKey(String),

    /// The sequential store is full.
    #[error("store is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// No item with this name is stored.
    #[error("item not found: {0:?}")]
    NotFound(String),

    /// The operation requires a state the store is not in.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
