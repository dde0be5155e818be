//! Test fixtures and helpers.
//!
//! Deterministic inventories for integration tests and benchmarks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use satchel::{Backpack, BackpackConfig, StoreKind};
use satchel_core::Item;
use satchel_store::{InventoryStore, LinkedStore, SequentialStore};

/// Build item number `i`.
///
/// Names are zero-padded (`item-00042`) so numeric and name order agree.
pub fn numbered_item(i: usize) -> Item {
    Item::new(format!("item-{i:05}"), "bulk", (i % 100) as i32)
        .expect("numbered item in bounds")
}

/// A seeded source of shuffled inventories.
pub struct TestFixture {
    rng: StdRng,
}

impl TestFixture {
    /// Create a fixture with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `count` numbered items in shuffled order.
    pub fn shuffled_items(&mut self, count: usize) -> Vec<Item> {
        let mut items: Vec<Item> = (0..count).map(numbered_item).collect();
        items.shuffle(&mut self.rng);
        items
    }

    /// A sequential store holding `count` shuffled items.
    ///
    /// The store's capacity is raised to fit when `count` exceeds the
    /// default.
    pub fn sequential_store(&mut self, count: usize) -> SequentialStore {
        let capacity = count.max(satchel_store::DEFAULT_CAPACITY);
        let mut store = SequentialStore::with_capacity(capacity);
        for item in self.shuffled_items(count) {
            store.insert(item).expect("fixture items are distinct");
        }
        store
    }

    /// A linked store holding `count` shuffled items.
    pub fn linked_store(&mut self, count: usize) -> LinkedStore {
        let mut store = LinkedStore::new();
        for item in self.shuffled_items(count) {
            store.insert(item).expect("fixture items are distinct");
        }
        store
    }

    /// A backpack with the same `count` items in both stores, inserted in
    /// the same shuffled order.
    pub fn backpack(&mut self, count: usize) -> Backpack {
        let mut backpack = Backpack::new(BackpackConfig {
            capacity: count.max(satchel_store::DEFAULT_CAPACITY),
            ..BackpackConfig::default()
        });
        for item in self.shuffled_items(count) {
            backpack
                .insert(StoreKind::Sequential, item.clone())
                .expect("fixture items are distinct");
            backpack
                .insert(StoreKind::Linked, item)
                .expect("fixture items are distinct");
        }
        backpack
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_fixtures_are_deterministic() {
        let a = TestFixture::with_seed(42).shuffled_items(30);
        let b = TestFixture::with_seed(42).shuffled_items(30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_sequential_store_fits() {
        let store = TestFixture::with_seed(1).sequential_store(250);
        assert_eq!(store.len(), 250);
        assert_eq!(store.capacity(), 250);
    }

    #[test]
    fn test_backpack_holds_same_items() {
        let backpack = TestFixture::with_seed(3).backpack(10);
        let mut seq: Vec<Item> = backpack.sequential().list().cloned().collect();
        let mut linked: Vec<Item> = backpack.linked().list().cloned().collect();
        seq.sort_by(|a, b| a.name.cmp(&b.name));
        linked.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(seq, linked);
    }
}
