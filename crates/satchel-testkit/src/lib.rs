//! # Satchel Testkit
//!
//! Testing utilities for Satchel.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for names, items and sets of
//!   distinct items
//! - **Fixtures**: Deterministic inventories for scenario tests and
//!   benchmarks
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use satchel_testkit::generators::distinct_items;
//!
//! proptest! {
//!     #[test]
//!     fn every_insert_is_listed(items in distinct_items(50)) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use satchel_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::with_seed(7);
//! let backpack = fixture.backpack(20);
//! assert_eq!(backpack.sequential().as_slice().len(), 20);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{numbered_item, TestFixture};
pub use generators::{distinct_items, item, item_name, ItemParams};
