//! Search outcomes.
//!
//! Every search reports how many comparisons it made alongside what it
//! found, so the cost of the most recent lookup travels with its result
//! instead of living in shared state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of elements (or midpoints) a single search examined.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Comparisons(pub u64);

impl Comparisons {
    pub const ZERO: Self = Self(0);

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Count one more examination.
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for Comparisons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Comparisons> for u64 {
    fn from(c: Comparisons) -> Self {
        c.0
    }
}

/// The result of one search: the hit (if any) and what it cost.
///
/// A miss is not an error at this level; stores convert it into their own
/// `NotFound` through [`SearchOutcome::found`] or equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    /// What the search located, or `None` on a miss.
    pub hit: Option<T>,
    /// Comparisons made by this invocation only.
    pub comparisons: Comparisons,
}

impl<T> SearchOutcome<T> {
    pub fn hit(value: T, comparisons: Comparisons) -> Self {
        Self {
            hit: Some(value),
            comparisons,
        }
    }

    pub fn miss(comparisons: Comparisons) -> Self {
        Self {
            hit: None,
            comparisons,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Turn a miss into an error produced by `on_miss`.
    pub fn found<E>(self, on_miss: impl FnOnce() -> E) -> Result<T, E> {
        self.hit.ok_or_else(on_miss)
    }
}
