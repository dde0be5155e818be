//! Linked store: a singly linked chain of owned nodes.
//!
//! New items are linked in at the head, so listing yields the most recent
//! arrival first. The chain is a line of `Box`es: every node is owned by
//! exactly one predecessor (or by the head slot), and splicing moves that
//! ownership rather than copying it. The length is not cached.

use std::fmt;

use satchel_core::{Comparisons, Item, SearchOutcome};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::{InventoryStore, StoreKind};

type Link = Option<Box<Node>>;

struct Node {
    data: Item,
    next: Link,
}

/// Unbounded singly linked inventory.
///
/// Dropping the store releases every node iteratively, so arbitrarily long
/// chains do not exhaust the stack.
pub struct LinkedStore {
    head: Link,
}

impl LinkedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Release every node, head to tail, and return how many were freed.
    ///
    /// The store is empty afterwards. Calling it on an empty store is a
    /// no-op that returns zero.
    pub fn teardown(&mut self) -> usize {
        let mut released = 0;
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
            released += 1;
        }
        if released > 0 {
            debug!(released, "tore down linked store");
        }
        released
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Default for LinkedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for LinkedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl InventoryStore for LinkedStore {
    type Hit<'a> = &'a Item;
    type Iter<'a> = Iter<'a>;

    fn kind(&self) -> StoreKind {
        StoreKind::Linked
    }

    fn insert(&mut self, item: Item) -> Result<()> {
        if self.contains(item.name()) {
            return Err(StoreError::DuplicateKey(item.name().to_string()));
        }

        debug!(name = item.name(), "inserted at head of linked store");
        let node = Box::new(Node {
            data: item,
            next: self.head.take(),
        });
        self.head = Some(node);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<Item> {
        // `cursor` is the slot that owns the node under inspection: the
        // head slot first, then each predecessor's `next`. A node that does
        // not match goes straight back into its slot.
        let mut cursor = &mut self.head;
        let mut position = 0usize;
        loop {
            match cursor.take() {
                None => return Err(StoreError::NotFound(name.to_string())),
                Some(mut node) if node.data.has_name(name) => {
                    *cursor = node.next.take();
                    debug!(name, position, "unlinked from linked store");
                    return Ok(node.data);
                }
                Some(node) => {
                    cursor = &mut cursor.insert(node).next;
                    position += 1;
                }
            }
        }
    }

    fn list(&self) -> Iter<'_> {
        self.iter()
    }

    fn sequential_search(&self, name: &str) -> SearchOutcome<&Item> {
        let mut comparisons = Comparisons::ZERO;
        for item in self.iter() {
            comparisons.bump();
            if item.has_name(name) {
                debug!(name, %comparisons, "linked search hit");
                return SearchOutcome::hit(item, comparisons);
            }
        }
        debug!(name, %comparisons, "linked search miss");
        SearchOutcome::miss(comparisons)
    }

    /// Walks the whole chain.
    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Head-to-tail iterator over a [`LinkedStore`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a> IntoIterator for &'a LinkedStore {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
