//! Store trait: the contract both inventory engines share.

use serde::{Deserialize, Serialize};
use std::fmt;

use satchel_core::{Item, SearchOutcome};

use crate::error::{Result, StoreError};

/// Which engine a store is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Bounded contiguous storage.
    Sequential,
    /// Singly linked chain.
    Linked,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sequential => f.write_str("sequential"),
            StoreKind::Linked => f.write_str("linked"),
        }
    }
}

/// The operations every inventory engine supports.
///
/// Stores are exclusively owned: mutation takes `&mut self` and there is no
/// interior locking.
///
/// # Design Notes
///
/// - **Unique names**: `insert` rejects a name that is already stored,
///   whatever the other fields hold.
/// - **No partial mutation**: a failed call leaves the store unchanged.
/// - **Store-specific hits**: a sequential search yields whatever locates
///   an item best in that engine (an index for contiguous storage, a
///   reference for a chain).
pub trait InventoryStore {
    /// What a successful sequential search yields.
    type Hit<'a>
    where
        Self: 'a;

    /// Iterator returned by [`list`](Self::list).
    type Iter<'a>: Iterator<Item = &'a Item>
    where
        Self: 'a;

    /// Which engine this is.
    fn kind(&self) -> StoreKind;

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Store an item.
    ///
    /// # Errors
    /// - `DuplicateKey` if an item with the same name is stored.
    /// - `CapacityExceeded` if the engine is bounded and full.
    fn insert(&mut self, item: Item) -> Result<()>;

    /// Remove the item with this name and hand it back.
    ///
    /// # Errors
    /// - `NotFound` if no item has this name.
    fn remove(&mut self, name: &str) -> Result<Item>;

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Lazily iterate over the stored items in the engine's natural order.
    ///
    /// Does not mutate; calling it again starts over. An empty iterator
    /// means an empty store.
    fn list(&self) -> Self::Iter<'_>;

    /// Scan for `name` from the front, counting one comparison per item
    /// examined (the match included).
    fn sequential_search(&self, name: &str) -> SearchOutcome<Self::Hit<'_>>;

    /// Number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.list().any(|item| item.has_name(name))
    }

    /// Sequential search with a miss turned into `NotFound`.
    fn find(&self, name: &str) -> Result<Self::Hit<'_>> {
        self.sequential_search(name)
            .found(|| StoreError::NotFound(name.to_string()))
    }
}
