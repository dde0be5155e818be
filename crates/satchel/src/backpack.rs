//! The Backpack: one inventory held in both engines.
//!
//! The Backpack owns a sequential store, a linked store and the comparison
//! counters. Callers pick a side per operation; the stores never talk to
//! each other.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use satchel_core::{Item, SearchOutcome};
use satchel_store::{
    InventoryStore, LinkedStore, SequentialStore, SortReport, StoreKind, DEFAULT_CAPACITY,
};
use tracing::{debug, info};

use crate::counters::{ComparisonCounters, SearchKind};
use crate::error::Result;

/// Configuration for the Backpack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackpackConfig {
    /// Capacity of the sequential store.
    pub capacity: usize,
    /// Whether searches and sorts report their wall-clock time.
    pub measure_time: bool,
}

impl Default for BackpackConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            measure_time: true,
        }
    }
}

/// A value together with how long it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    /// `None` when timing is disabled in [`BackpackConfig`].
    pub elapsed: Option<Duration>,
}

fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> Timed<T> {
    if enabled {
        let started = Instant::now();
        let value = f();
        Timed {
            value,
            elapsed: Some(started.elapsed()),
        }
    } else {
        Timed {
            value: f(),
            elapsed: None,
        }
    }
}

/// Both stores' contents, each in its own listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub sequential: Vec<Item>,
    pub linked: Vec<Item>,
}

/// An inventory kept in a sequential and a linked store side by side.
pub struct Backpack {
    sequential: SequentialStore,
    linked: LinkedStore,
    counters: ComparisonCounters,
    config: BackpackConfig,
}

impl Backpack {
    /// Create an empty backpack.
    pub fn new(config: BackpackConfig) -> Self {
        Self {
            sequential: SequentialStore::with_capacity(config.capacity),
            linked: LinkedStore::new(),
            counters: ComparisonCounters::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackpackConfig {
        &self.config
    }

    pub fn sequential(&self) -> &SequentialStore {
        &self.sequential
    }

    pub fn sequential_mut(&mut self) -> &mut SequentialStore {
        &mut self.sequential
    }

    pub fn linked(&self) -> &LinkedStore {
        &self.linked
    }

    pub fn linked_mut(&mut self) -> &mut LinkedStore {
        &mut self.linked
    }

    /// Current comparison counters.
    pub fn counters(&self) -> ComparisonCounters {
        self.counters
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert an item into one store.
    pub fn insert(&mut self, side: StoreKind, item: Item) -> Result<()> {
        let name = item.name().to_string();
        let result = match side {
            StoreKind::Sequential => self.sequential.insert(item),
            StoreKind::Linked => self.linked.insert(item),
        };
        if let Err(e) = &result {
            debug!(%side, %name, error = %e, "insert rejected");
        }
        Ok(result?)
    }

    /// Build an item from raw fields and insert it into one store.
    ///
    /// Field bounds are checked before the store is consulted.
    pub fn insert_new(
        &mut self,
        side: StoreKind,
        name: &str,
        category: &str,
        quantity: i32,
    ) -> Result<()> {
        let item = Item::new(name, category, quantity)?;
        self.insert(side, item)
    }

    /// Remove an item by name from one store.
    pub fn remove(&mut self, side: StoreKind, name: &str) -> Result<Item> {
        let result = match side {
            StoreKind::Sequential => self.sequential.remove(name),
            StoreKind::Linked => self.linked.remove(name),
        };
        if let Err(e) = &result {
            debug!(%side, name, error = %e, "remove rejected");
        }
        Ok(result?)
    }

    /// Selection-sort the sequential store by name.
    pub fn sort_sequential(&mut self) -> Timed<SortReport> {
        timed(self.config.measure_time, || self.sequential.sort())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Searches (each records its comparison count)
    // ─────────────────────────────────────────────────────────────────────────

    /// Sequential search in the sequential store; the hit is an index.
    pub fn search_sequential(&mut self, name: &str) -> Timed<SearchOutcome<usize>> {
        let result = timed(self.config.measure_time, || {
            self.sequential.sequential_search(name)
        });
        self.counters
            .record(SearchKind::SequentialScan, result.value.comparisons);
        result
    }

    /// Binary search in the sequential store; the hit is an index.
    ///
    /// A refused search (store not sorted) leaves the counters untouched.
    pub fn binary_search(&mut self, name: &str) -> Result<Timed<SearchOutcome<usize>>> {
        let Timed { value, elapsed } =
            timed(self.config.measure_time, || self.sequential.binary_search(name));
        let outcome = value?;
        self.counters.record(SearchKind::Binary, outcome.comparisons);
        Ok(Timed {
            value: outcome,
            elapsed,
        })
    }

    /// Sequential search in the linked store; the hit is the item.
    pub fn search_linked(&mut self, name: &str) -> Timed<SearchOutcome<&Item>> {
        let result = timed(self.config.measure_time, || {
            self.linked.sequential_search(name)
        });
        self.counters
            .record(SearchKind::LinkedScan, result.value.comparisons);
        result
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reporting & teardown
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy both stores' contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sequential: self.sequential.list().cloned().collect(),
            linked: self.linked.list().cloned().collect(),
        }
    }

    /// Release the linked store's nodes and return how many were freed.
    pub fn close(mut self) -> usize {
        let released = self.linked.teardown();
        info!(
            released,
            sequential = self.sequential.len(),
            "closed backpack"
        );
        released
    }
}

impl Default for Backpack {
    fn default() -> Self {
        Self::new(BackpackConfig::default())
    }
}
