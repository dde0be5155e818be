//! Sequential store: bounded contiguous storage.
//!
//! Items live in one buffer in insertion order. Removal shifts the tail
//! left by one slot, so relative order is always preserved. Sorting is a
//! selection sort by name; binary search is only valid on a sorted store,
//! which the store tracks and enforces.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use satchel_core::{Comparisons, Item, SearchOutcome};
use tracing::{debug, trace};

use crate::error::{Result, StoreError};
use crate::traits::{InventoryStore, StoreKind};

/// Default capacity of a sequential store.
pub const DEFAULT_CAPACITY: usize = 100;

/// What a call to [`SequentialStore::sort`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    /// Number of items in the store when it was sorted.
    pub len: usize,
    /// Number of swaps performed; zero if the store was already in order.
    pub swaps: usize,
}

/// Bounded, order-preserving contiguous inventory.
pub struct SequentialStore {
    items: Vec<Item>,
    capacity: usize,
    /// Whether `items` is known to be in ascending name order.
    sorted: bool,
}

impl SequentialStore {
    /// Create an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` items.
    ///
    /// `capacity` is a limit; at most [`DEFAULT_CAPACITY`] slots are
    /// reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            sorted: true,
        }
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Whether the store is currently known to be in name order, i.e.
    /// whether [`binary_search`](Self::binary_search) will run.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.has_name(name))
    }

    /// Sort ascending by name with a selection sort.
    ///
    /// For each position `i`, the smallest name in `[i, len)` is selected
    /// and swapped into `i` when it is not already there. A store with at
    /// most one item is left alone. Comparison counters are not involved.
    pub fn sort(&mut self) -> SortReport {
        let len = self.items.len();
        let mut swaps = 0;

        if len > 1 {
            for i in 0..len - 1 {
                let mut min = i;
                for j in (i + 1)..len {
                    if self.items[j].name < self.items[min].name {
                        min = j;
                    }
                }
                if min != i {
                    self.items.swap(i, min);
                    swaps += 1;
                }
            }
        }

        self.sorted = true;
        debug!(len, swaps, "sorted sequential store");
        SortReport { len, swaps }
    }

    /// Binary search for `name` over the whole store.
    ///
    /// Counts one comparison per examined midpoint. The midpoint of the
    /// inclusive range `[low, high]` is `(low + high) / 2`.
    ///
    /// # Errors
    /// - `PreconditionViolated` if the store is not known to be sorted.
    ///   Call [`sort`](Self::sort) first.
    pub fn binary_search(&self, name: &str) -> Result<SearchOutcome<usize>> {
        if !self.sorted {
            return Err(StoreError::PreconditionViolated(
                "binary search requires a sorted store".to_string(),
            ));
        }

        let mut comparisons = Comparisons::ZERO;
        // Half-open [low, high) so an empty range never underflows.
        let mut low = 0;
        let mut high = self.items.len();

        while low < high {
            let mid = low + (high - 1 - low) / 2;
            comparisons.bump();
            trace!(low, high, mid, "binary search step");

            match name.cmp(self.items[mid].name()) {
                Ordering::Equal => {
                    debug!(name, index = mid, %comparisons, "binary search hit");
                    return Ok(SearchOutcome::hit(mid, comparisons));
                }
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
            }
        }

        debug!(name, %comparisons, "binary search miss");
        Ok(SearchOutcome::miss(comparisons))
    }
}

impl Default for SequentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SequentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialStore")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("sorted", &self.sorted)
            .field("items", &self.items)
            .finish()
    }
}

impl InventoryStore for SequentialStore {
    type Hit<'a> = usize;
    type Iter<'a> = std::slice::Iter<'a, Item>;

    fn kind(&self) -> StoreKind {
        StoreKind::Sequential
    }

    fn insert(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.position_of(item.name()).is_some() {
            return Err(StoreError::DuplicateKey(item.name().to_string()));
        }

        // Appending a name above the current last one keeps the order.
        let extends_order = self
            .items
            .last()
            .map_or(true, |last| last.name < item.name);
        self.sorted = self.items.is_empty() || (self.sorted && extends_order);

        debug!(name = item.name(), index = self.items.len(), "inserted into sequential store");
        self.items.push(item);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Item> {
        let index = self
            .position_of(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        // Shifts every later item one slot left; order is preserved, and
        // so is sortedness. At most one item left is trivially sorted.
        let removed = self.items.remove(index);
        if self.items.len() <= 1 {
            self.sorted = true;
        }
        debug!(name, index, "removed from sequential store");
        Ok(removed)
    }

    fn list(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    fn sequential_search(&self, name: &str) -> SearchOutcome<usize> {
        let mut comparisons = Comparisons::ZERO;
        for (index, item) in self.items.iter().enumerate() {
            comparisons.bump();
            if item.has_name(name) {
                debug!(name, index, %comparisons, "sequential search hit");
                return SearchOutcome::hit(index, comparisons);
            }
        }
        debug!(name, %comparisons, "sequential search miss");
        SearchOutcome::miss(comparisons)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a> IntoIterator for &'a SequentialStore {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str) -> Item {
        Item::new(name, "misc", 1).unwrap()
    }

    fn names(store: &SequentialStore) -> Vec<&str> {
        store.list().map(|i| i.name()).collect()
    }

    fn filled(names: &[&str]) -> SequentialStore {
        let mut store = SequentialStore::new();
        for name in names {
            store.insert(item(name)).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_appends_in_order() {
        let store = filled(&["Sword", "Potion", "Shield"]);
        assert_eq!(store.len(), 3);
        assert_eq!(names(&store), ["Sword", "Potion", "Shield"]);
    }

    #[test]
    fn test_insert_duplicate_leaves_store_unchanged() {
        let mut store = filled(&["Sword", "Potion"]);
        let err = store
            .insert(Item::new("Potion", "poison", 99).unwrap())
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("Potion".into()));

        assert_eq!(names(&store), ["Sword", "Potion"]);
        assert_eq!(store.get(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut store = SequentialStore::with_capacity(2);
        store.insert(item("a")).unwrap();
        store.insert(item("b")).unwrap();

        let err = store.insert(item("c")).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { capacity: 2 });
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_capacity_checked_before_duplicate() {
        let mut store = SequentialStore::with_capacity(1);
        store.insert(item("a")).unwrap();
        assert!(matches!(
            store.insert(item("a")),
            Err(StoreError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_default_capacity() {
        let mut store = SequentialStore::new();
        for i in 0..DEFAULT_CAPACITY {
            store.insert(item(&format!("item-{i:03}"))).unwrap();
        }
        assert!(store.is_full());
        assert!(matches!(
            store.insert(item("one-too-many")),
            Err(StoreError::CapacityExceeded { capacity: DEFAULT_CAPACITY })
        ));
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut store = filled(&["a", "b", "c", "d"]);
        let removed = store.remove("b").unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&store), ["a", "c", "d"]);

        assert_eq!(
            store.remove("b").unwrap_err(),
            StoreError::NotFound("b".into())
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_then_search_misses() {
        let mut store = filled(&["a", "b"]);
        store.remove("a").unwrap();
        assert!(store.find("a").is_err());
        assert!(!store.contains("a"));
    }

    #[test]
    fn test_list_is_restartable() {
        let store = filled(&["x", "y"]);
        assert_eq!(store.list().count(), 2);
        assert_eq!(store.list().count(), 2);
        assert_eq!(SequentialStore::new().list().next(), None);
    }

    #[test]
    fn test_sequential_search_counts() {
        let store = filled(&["a", "b", "c"]);

        let hit = store.sequential_search("a");
        assert_eq!(hit.hit, Some(0));
        assert_eq!(hit.comparisons, Comparisons(1));

        let hit = store.sequential_search("c");
        assert_eq!(hit.hit, Some(2));
        assert_eq!(hit.comparisons, Comparisons(3));

        let miss = store.sequential_search("z");
        assert_eq!(miss.hit, None);
        assert_eq!(miss.comparisons, Comparisons(3));

        let empty = SequentialStore::new().sequential_search("a");
        assert_eq!(empty.comparisons, Comparisons::ZERO);
    }

    #[test]
    fn test_sort_orders_by_name() {
        let mut store = filled(&["Sword", "Potion", "Shield"]);
        let report = store.sort();
        assert_eq!(names(&store), ["Potion", "Shield", "Sword"]);
        assert_eq!(report.len, 3);
        assert!(report.swaps > 0);
        assert!(store.is_sorted());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut store = filled(&["d", "a", "c", "b"]);
        store.sort();
        let first = names(&store).join(",");

        let report = store.sort();
        assert_eq!(report.swaps, 0);
        assert_eq!(names(&store).join(","), first);
    }

    #[test]
    fn test_sort_small_store_is_noop() {
        let mut store = SequentialStore::new();
        assert_eq!(store.sort(), SortReport { len: 0, swaps: 0 });

        store.insert(item("only")).unwrap();
        assert_eq!(store.sort(), SortReport { len: 1, swaps: 0 });
        assert_eq!(names(&store), ["only"]);
    }

    #[test]
    fn test_binary_search_scenario() {
        let mut store = SequentialStore::new();
        store.insert(Item::new("Sword", "weapon", 1).unwrap()).unwrap();
        store.insert(Item::new("Potion", "cure", 5).unwrap()).unwrap();
        store.insert(Item::new("Shield", "armor", 2).unwrap()).unwrap();
        store.sort();

        let outcome = store.binary_search("Shield").unwrap();
        assert_eq!(outcome.hit, Some(1));
        assert_eq!(outcome.comparisons, Comparisons(1));
    }

    #[test]
    fn test_binary_search_miss_counts_midpoints() {
        let mut store = filled(&["b", "d", "f", "h", "j", "l", "n"]);
        store.sort();

        let miss = store.binary_search("a").unwrap();
        assert_eq!(miss.hit, None);
        assert_eq!(miss.comparisons, Comparisons(3));

        let empty = SequentialStore::new().binary_search("a").unwrap();
        assert_eq!(empty.hit, None);
        assert_eq!(empty.comparisons, Comparisons::ZERO);
    }

    #[test]
    fn test_binary_search_requires_sort() {
        let store = filled(&["b", "a"]);
        assert!(!store.is_sorted());
        assert!(matches!(
            store.binary_search("a"),
            Err(StoreError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_sortedness_tracking() {
        // Ascending inserts keep the store sorted.
        let mut store = filled(&["a", "b", "c"]);
        assert!(store.is_sorted());

        // Removal preserves order.
        store.remove("b").unwrap();
        assert!(store.is_sorted());
        assert_eq!(store.binary_search("c").unwrap().hit, Some(1));

        // An out-of-order insert loses it until the next sort.
        store.insert(item("0")).unwrap();
        assert!(!store.is_sorted());
        store.sort();
        assert_eq!(store.binary_search("0").unwrap().hit, Some(0));
    }

    #[test]
    fn test_unsorted_store_shrunk_to_one_is_sorted() {
        let mut store = filled(&["b", "a"]);
        assert!(!store.is_sorted());

        store.remove("b").unwrap();
        assert!(store.is_sorted());
        let outcome = store.binary_search("a").unwrap();
        assert_eq!(outcome.hit, Some(0));
        assert_eq!(outcome.comparisons, Comparisons(1));
    }

    #[test]
    fn test_unsorted_store_emptied_is_sorted() {
        let mut store = filled(&["b", "a"]);
        store.remove("b").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_sorted());
        assert_eq!(store.binary_search("a").unwrap().hit, None);

        // The first insert into an emptied store keeps it sorted.
        store.insert(item("z")).unwrap();
        assert!(store.is_sorted());
        assert_eq!(store.binary_search("z").unwrap().hit, Some(0));
    }

    #[test]
    fn test_huge_capacity_is_a_limit() {
        let mut store = SequentialStore::with_capacity(usize::MAX);
        assert_eq!(store.capacity(), usize::MAX);
        assert!(!store.is_full());
        store.insert(item("a")).unwrap();
        assert_eq!(store.len(), 1);

        let store = SequentialStore::with_capacity(1 << 40);
        assert_eq!(store.capacity(), 1 << 40);
    }

    fn distinct_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,15}", 0..=max)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        #[test]
        fn test_count_tracks_successful_inserts(names in distinct_names(40)) {
            let mut store = SequentialStore::with_capacity(25);
            let mut accepted = 0;
            for name in &names {
                match store.insert(item(name)) {
                    Ok(()) => accepted += 1,
                    Err(e) => prop_assert_eq!(e, StoreError::CapacityExceeded { capacity: 25 }),
                }
            }
            prop_assert_eq!(store.len(), accepted);
            prop_assert_eq!(accepted, names.len().min(25));
        }

        #[test]
        fn test_sort_yields_non_decreasing_names(names in distinct_names(60)) {
            let mut store = SequentialStore::new();
            for name in &names {
                store.insert(item(name)).unwrap();
            }
            store.sort();
            let sorted: Vec<&str> = store.list().map(|i| i.name()).collect();
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(sorted.len(), names.len());
        }

        #[test]
        fn test_sorted_flag_matches_contents(
            ops in prop::collection::vec((any::<bool>(), 0usize..8), 0..60)
        ) {
            let pool = ["d", "b", "g", "a", "f", "c", "h", "e"];
            let mut store = SequentialStore::with_capacity(8);
            for (is_insert, pick) in ops {
                let name = pool[pick];
                if is_insert {
                    let _ = store.insert(item(name));
                } else {
                    let _ = store.remove(name);
                }

                let names: Vec<&str> = store.list().map(|i| i.name()).collect();
                if names.len() <= 1 {
                    prop_assert!(store.is_sorted());
                }
                if store.is_sorted() {
                    prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
                    prop_assert!(store.binary_search(name).is_ok());
                }
            }
        }

        #[test]
        fn test_binary_search_within_log_bound(names in distinct_names(100), pick in any::<prop::sample::Index>()) {
            prop_assume!(!names.is_empty());
            let mut store = SequentialStore::new();
            for name in &names {
                store.insert(item(name)).unwrap();
            }
            store.sort();

            let target = pick.get(&names);
            let n = store.len() as u64;
            let bound = u64::from(64 - n.leading_zeros()); // ceil(log2(n + 1))

            let binary = store.binary_search(target).unwrap();
            let linear = store.sequential_search(target);
            prop_assert_eq!(binary.hit, linear.hit);
            prop_assert!(binary.comparisons.get() <= bound);
            prop_assert!(linear.comparisons.get() <= n);
        }
    }
}
