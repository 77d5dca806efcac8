//! Selection persistence
//!
//! A single named key-value slot holds a JSON array of simplified product
//! records. The slot is written on every selection mutation and read once
//! at startup. Absent or unparsable data is treated as an empty list.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::catalog::{id_as_string, Product};
use crate::error::{StorageError, StorageResult};
use crate::selection::SelectionStore;

/// Durable projection of a selected product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// Older pages wrote numeric ids; both forms read back as strings.
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

impl From<&Product> for PersistedRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: non_empty(&product.name),
            brand: non_empty(&product.brand),
            category: non_empty(&product.category),
            description: non_empty(&product.description),
        }
    }
}

/// A named key-value slot (browser local storage, or memory in tests).
pub trait SelectionSlot {
    /// Raw slot contents, `None` when absent or unreadable.
    fn read(&self) -> Option<String>;

    fn write(&self, value: &str) -> StorageResult<()>;
}

/// Serialize the store's records into the slot.
pub fn save_selection<S: SelectionSlot + ?Sized>(
    slot: &S,
    store: &SelectionStore,
) -> StorageResult<()> {
    let raw = serde_json::to_string(&store.to_records())?;
    slot.write(&raw)
}

/// Read persisted records. Never fails: missing or corrupt data is empty.
pub fn load_records<S: SelectionSlot + ?Sized>(slot: &S) -> Vec<PersistedRecord> {
    let Some(raw) = slot.read() else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<PersistedRecord>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Ignoring unparsable saved selections: {e}");
            Vec::new()
        }
    }
}

/// In-memory slot. Clones share the same cell.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value.into()))),
        }
    }
}

impl SelectionSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(value.to_string());
        Ok(())
    }
}
