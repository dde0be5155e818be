//! # Satchel Store
//!
//! Two inventory engines with the same logical contract and different
//! storage, so their costs can be compared side by side.
//!
//! ## Overview
//!
//! Both engines implement the [`InventoryStore`] trait: insert, remove by
//! name, list, and sequential search. The asymmetry between them is
//! intentional:
//!
//! - [`SequentialStore`] - bounded contiguous storage in insertion order,
//!   with selection sort and binary search
//! - [`LinkedStore`] - unbounded singly linked chain with head insertion,
//!   no sort and no binary search
//!
//! ## Usage
//!
//! ```rust
//! use satchel_core::Item;
//! use satchel_store::{InventoryStore, SequentialStore};
//!
//! let mut store = SequentialStore::new();
//! store.insert(Item::new("Sword", "weapon", 1).unwrap()).unwrap();
//! store.insert(Item::new("Potion", "cure", 5).unwrap()).unwrap();
//!
//! store.sort();
//! let outcome = store.binary_search("Sword").unwrap();
//! assert_eq!(outcome.hit, Some(1));
//! ```
//!
//! ## Design Notes
//!
//! - **Counts travel with results**: every search returns its comparison
//!   count in a [`SearchOutcome`](satchel_core::SearchOutcome).
//! - **No partial mutation**: every failure is detected before the store
//!   is touched.
//! - **Checked sort precondition**: binary search on a store that is not
//!   known to be in name order fails with
//!   [`StoreError::PreconditionViolated`].

pub mod error;
pub mod linked;
pub mod sequential;
pub mod traits;

pub use error::{Result, StoreError};
pub use linked::LinkedStore;
pub use sequential::{SequentialStore, SortReport, DEFAULT_CAPACITY};
pub use traits::{InventoryStore, StoreKind};
