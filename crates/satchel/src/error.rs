//! Error types for the Backpack facade.

use satchel_core::FieldError;
use satchel_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Backpack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatchelError {
    /// A field was out of bounds.
    #[error("invalid field: {0}")]
    Field(#[from] FieldError),

    /// A store rejected the operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for Backpack operations.
pub type Result<T> = std::result::Result<T, SatchelError>;
