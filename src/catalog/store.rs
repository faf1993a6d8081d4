//! In-memory item store.
//!
//! The authoritative collection of catalog items for the process lifetime.
//! All data is lost on shutdown; there is no persistence. A single coarse
//! `RwLock` guards the whole collection: reads share it, each mutation holds
//! it exclusively. No I/O happens under the lock.

use std::collections::HashMap;
use std::sync::RwLock;

use super::error::StoreError;
use super::models::Item;

/// In-memory store of catalog items keyed by id.
pub struct ItemStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    /// Items indexed by id.
    items: HashMap<i64, Item>,

    /// Insertion order of ids, kept so listing is deterministic.
    order: Vec<i64>,
}

impl ItemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                items: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Snapshot copy of all items in insertion order.
    pub fn list(&self) -> Vec<Item> {
        let inner = self.inner.read().unwrap();
        inner
            .order
            .iter()
            .filter_map(|id| inner.items.get(id).cloned())
            .collect()
    }

    /// Fetch a copy of the item with the given id.
    pub fn get(&self, id: i64) -> Result<Item, StoreError> {
        let inner = self.inner.read().unwrap();
        inner.items.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    /// Insert a new item. Fails with `Conflict` if the id is already taken,
    /// leaving the store untouched.
    pub fn create(&self, item: Item) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().unwrap();

        if inner.items.contains_key(&item.id) {
            return Err(StoreError::Conflict);
        }

        inner.order.push(item.id);
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    /// Fully overwrite the item stored under `id`. The stored id is forced to
    /// the path `id`, so the map key and the record's own id never diverge
    /// even when the payload carries a different one. Fails with `NotFound`
    /// if no such entry exists.
    pub fn replace(&self, id: i64, mut item: Item) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().unwrap();

        if !inner.items.contains_key(&id) {
            return Err(StoreError::NotFound);
        }

        item.id = id;
        inner.items.insert(id, item.clone());
        Ok(item)
    }

    /// Remove the item with the given id and return it.
    pub fn delete(&self, id: i64) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().unwrap();

        let removed = inner.items.remove(&id).ok_or(StoreError::NotFound)?;
        inner.order.retain(|&other| other != id);
        Ok(removed)
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
