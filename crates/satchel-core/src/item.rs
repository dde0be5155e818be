//! Item: one entry of an inventory.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FieldError;
use crate::types::{Category, ItemName};

/// An inventory entry.
///
/// Identity is the `name`; the stores reject a second item with an equal
/// name. `category` and `quantity` are payload and play no part in
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    pub category: Category,
    pub quantity: i32,
}

impl Item {
    /// Build an item from raw fields, checking the text bounds.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: ItemName::new(name)?,
            category: Category::new(category)?,
            quantity,
        })
    }

    /// Build an item from already-validated fields.
    pub fn from_parts(name: ItemName, category: Category, quantity: i32) -> Self {
        Self {
            name,
            category,
            quantity,
        }
    }

    /// The item's key.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.name, self.category, self.quantity
        )
    }
}
