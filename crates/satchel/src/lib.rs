//! # Satchel
//!
//! The unified API for Satchel: a small inventory kept in two engines side
//! by side so the cost of each operation can be compared.
//!
//! ## Overview
//!
//! - **Sequential store**: bounded contiguous storage with selection sort
//!   and binary search
//! - **Linked store**: unbounded singly linked chain with head insertion
//! - **Comparison counters**: the comparison count of the latest run of
//!   each search, kept per [`Backpack`]
//!
//! The two stores are independent. The same name may be present in both
//! with different fields.
//!
//! ## Usage
//!
//! ```rust
//! use satchel::{Backpack, BackpackConfig, Item, StoreKind};
//!
//! let mut backpack = Backpack::new(BackpackConfig::default());
//!
//! for (name, category, quantity) in [("Sword", "weapon", 1), ("Potion", "cure", 5), ("Shield", "armor", 2)] {
//!     let item = Item::new(name, category, quantity).unwrap();
//!     backpack.insert(StoreKind::Sequential, item.clone()).unwrap();
//!     backpack.insert(StoreKind::Linked, item).unwrap();
//! }
//!
//! backpack.sort_sequential();
//! let binary = backpack.binary_search("Shield").unwrap();
//! assert_eq!(binary.value.hit, Some(1));
//!
//! let linked = backpack.search_linked("Sword");
//! assert_eq!(linked.value.comparisons.get(), 3);
//!
//! let counters = backpack.counters();
//! assert_eq!(counters.binary_search.map(|c| c.get()), Some(1));
//! ```
//!
//! ## Re-exports
//!
//! - `satchel::core` - Item model and search outcome types
//! - `satchel::store` - The two engines and their trait

pub mod backpack;
pub mod counters;
pub mod error;

// Re-export component crates
pub use satchel_core as core;
pub use satchel_store as store;

// Re-export main types for convenience
pub use backpack::{Backpack, BackpackConfig, Snapshot, Timed};
pub use counters::{ComparisonCounters, SearchKind};
pub use error::{Result, SatchelError};

// Re-export commonly used component types
pub use satchel_core::{Category, Comparisons, FieldError, Item, ItemName, SearchOutcome};
pub use satchel_store::{
    InventoryStore, LinkedStore, SequentialStore, SortReport, StoreError, StoreKind,
};
