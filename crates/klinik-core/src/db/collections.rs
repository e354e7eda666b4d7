//! Typed access to JSON collections stored in slots.
//!
//! Reads never fail: a missing slot, a backend read error, or a document that
//! is not valid JSON all yield an empty collection. Individual elements that do
//! not fit the record type are dropped with a warning. Writes replace the whole
//! slot and propagate backend errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{KeyValueStore, Slot, StoreResult};

/// Read-full / write-full access to the shared store.
pub struct Repository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> Repository<'a, S> {
    /// Wrap a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Read the raw string in a slot, treating read failures as absent.
    pub fn load_raw(&self, slot: Slot) -> Option<String> {
        match self.store.get(slot.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "storage read failed, treating slot as empty");
                None
            }
        }
    }

    /// Write a raw string into a slot.
    pub fn save_raw(&self, slot: Slot, value: &str) -> StoreResult<()> {
        self.store.set(slot.key(), value)
    }

    /// Load a JSON array slot.
    pub fn load_collection<T: DeserializeOwned>(&self, slot: Slot) -> Vec<T> {
        let Some(raw) = self.load_raw(slot) else {
            return Vec::new();
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "corrupt collection, treating as empty");
                return Vec::new();
            }
        };

        let total = values.len();
        let items: Vec<T> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(slot = slot.key(), index, error = %e, "skipping malformed record");
                    None
                }
            })
            .collect();

        debug!(slot = slot.key(), loaded = items.len(), total, "loaded collection");
        items
    }

    /// Replace a JSON array slot.
    pub fn save_collection<T: Serialize>(&self, slot: Slot, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(slot.key(), &json)
    }

    /// Load a JSON object slot.
    pub fn load_value<T: DeserializeOwned>(&self, slot: Slot) -> Option<T> {
        let raw = self.load_raw(slot)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "corrupt value, treating as absent");
                None
            }
        }
    }

    /// Replace a JSON object slot.
    pub fn save_value<T: Serialize>(&self, slot: Slot, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(slot.key(), &json)
    }

    /// Remove a slot entirely.
    pub fn clear(&self, slot: Slot) -> StoreResult<bool> {
        self.store.remove(slot.key())
    }
}
