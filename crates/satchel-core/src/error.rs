//! Error types for Satchel Core.

use thiserror::Error;

/// Errors raised when a text field does not satisfy its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("item name must not be empty")]
    EmptyName,

    #[error("item name is {len} characters long, maximum is {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("category is {len} characters long, maximum is {max}")]
    CategoryTooLong { len: usize, max: usize },
}
