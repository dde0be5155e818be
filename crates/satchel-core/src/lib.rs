//! # Satchel Core
//!
//! Pure primitives shared by both inventory engines: the [`Item`] record,
//! its length-checked text fields, and the value types a search hands back.
//!
//! This crate contains no storage and no I/O.
//!
//! ## Key Types
//!
//! - [`Item`] - A named inventory entry with a category and a quantity
//! - [`ItemName`] - The unique key of an item (non-empty, bounded)
//! - [`Category`] - A short free-form label (bounded, may be empty)
//! - [`SearchOutcome`] - The hit of a search together with its [`Comparisons`]
//!
//! ## Bounded Fields
//!
//! Text fields are validated on construction and never truncated. Input
//! that is too long (or an empty name) is rejected with a [`FieldError`].

pub mod error;
pub mod item;
pub mod search;
pub mod types;

pub use error::FieldError;
pub use item::Item;
pub use search::{Comparisons, SearchOutcome};
pub use types::{Category, ItemName, CATEGORY_MAX_LEN, NAME_MAX_LEN};
