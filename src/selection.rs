//! Selection store
//!
//! Maps product key → product. Keys are unique, insertion order is kept for
//! display. Mutation goes through `toggle`, `remove`, `clear` and `restore`
//! only; `Picker` wraps these so that every change is persisted.

use indexmap::IndexMap;

use crate::catalog::{Catalog, Product};
use crate::persistence::PersistedRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    items: IndexMap<String, Product>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invert membership of `product`. Returns true if it is now selected.
    ///
    /// A product that is deselected and selected again goes to the end.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.items.shift_remove(&product.key).is_some() {
            false
        } else {
            self.items.insert(product.key.clone(), product.clone());
            true
        }
    }

    /// Remove `key` if present. Returns whether anything changed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.items.shift_remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the contents with catalog products matching `saved`.
    ///
    /// A record matches by id (string equality) first, then by
    /// case-insensitive name plus brand, where a record without a brand
    /// matches any brand. Records matching nothing are dropped. An empty
    /// `saved` list leaves the store as it is.
    pub fn restore(&mut self, saved: &[PersistedRecord], catalog: &Catalog) -> usize {
        if saved.is_empty() {
            return 0;
        }
        self.items.clear();
        for record in saved {
            match find_saved(record, catalog) {
                Some(product) => {
                    self.items.insert(product.key.clone(), product.clone());
                }
                None => log::debug!("Dropping saved selection with no catalog match: {record:?}"),
            }
        }
        self.items.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Selected products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.items.values()
    }

    pub fn to_records(&self) -> Vec<PersistedRecord> {
        self.items.values().map(PersistedRecord::from).collect()
    }
}

fn find_saved<'a>(record: &PersistedRecord, catalog: &'a Catalog) -> Option<&'a Product> {
    let products = catalog.products();

    if let Some(id) = &record.id {
        if let Some(found) = products.iter().find(|p| p.id.as_deref() == Some(id.as_str())) {
            return Some(found);
        }
    }

    let name = record.name.as_deref().filter(|n| !n.is_empty())?;
    let brand = record.brand.as_deref().filter(|b| !b.is_empty());
    products.iter().find(|p| {
        p.name.to_lowercase() == name.to_lowercase()
            && brand.map_or(true, |b| p.brand.to_lowercase() == b.to_lowercase())
    })
}
