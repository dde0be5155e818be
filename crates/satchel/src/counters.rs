//! Comparison counters: the cost of the latest run of each search.

use serde::{Deserialize, Serialize};
use std::fmt;

use satchel_core::Comparisons;

/// The three searches whose cost is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Sequential search over the sequential store.
    SequentialScan,
    /// Binary search over the sequential store.
    Binary,
    /// Sequential search over the linked store.
    LinkedScan,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::SequentialScan => f.write_str("sequential search (sequential store)"),
            SearchKind::Binary => f.write_str("binary search (sequential store)"),
            SearchKind::LinkedScan => f.write_str("sequential search (linked store)"),
        }
    }
}

/// Comparison count of the most recent completed run of each search.
///
/// Each slot is overwritten by the next run of its search; nothing is
/// accumulated. A slot is `None` until its search has run once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCounters {
    pub sequential_scan: Option<Comparisons>,
    pub binary_search: Option<Comparisons>,
    pub linked_scan: Option<Comparisons>,
}

impl ComparisonCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot for `kind` with the count of its latest run.
    pub fn record(&mut self, kind: SearchKind, comparisons: Comparisons) {
        *self.slot_mut(kind) = Some(comparisons);
    }

    pub fn get(&self, kind: SearchKind) -> Option<Comparisons> {
        match kind {
            SearchKind::SequentialScan => self.sequential_scan,
            SearchKind::Binary => self.binary_search,
            SearchKind::LinkedScan => self.linked_scan,
        }
    }

    fn slot_mut(&mut self, kind: SearchKind) -> &mut Option<Comparisons> {
        match kind {
            SearchKind::SequentialScan => &mut self.sequential_scan,
            SearchKind::Binary => &mut self.binary_search,
            SearchKind::LinkedScan => &mut self.linked_scan,
        }
    }
}

impl fmt::Display for ComparisonCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in [
            SearchKind::SequentialScan,
            SearchKind::Binary,
            SearchKind::LinkedScan,
        ] {
            match self.get(kind) {
                Some(c) => writeln!(f, "{kind}: {c} comparisons")?,
                None => writeln!(f, "{kind}: not run")?,
            }
        }
        Ok(())
    }
}
