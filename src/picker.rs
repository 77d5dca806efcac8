//! Picker state
//!
//! Owns the catalog snapshot, the filter inputs and the selection store.
//! Every selection mutation is funnelled through here so that the slot is
//! rewritten after each change; callers re-render from the new state.

use crate::catalog::{Catalog, Product};
use crate::persistence::{load_records, save_selection, SelectionSlot};
use crate::selection::SelectionStore;
use crate::text::normalize_text;
use crate::view::{self, ProductsView, SelectedSummary};

#[derive(Debug, Clone, Default)]
pub struct Picker<S> {
    catalog: Catalog,
    selection: SelectionStore,
    slot: S,
    category: String,
    query: String,
}

impl<S: SelectionSlot> Picker<S> {
    pub fn new(slot: S) -> Self {
        Self {
            catalog: Catalog::default(),
            selection: SelectionStore::new(),
            slot,
            category: String::new(),
            query: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the catalog snapshot.
    ///
    /// Selections whose product is no longer in the catalog are dropped so
    /// that every selected key stays backed by a loaded product.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        let stale: Vec<String> = self
            .selection
            .keys()
            .filter(|key| self.catalog.get(key).is_none())
            .map(String::from)
            .collect();
        if !stale.is_empty() {
            for key in &stale {
                self.selection.remove(key);
            }
            self.persist();
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rebuild the selection from the slot. Call once after the catalog loads.
    pub fn restore_from_storage(&mut self) -> usize {
        let saved = load_records(&self.slot);
        if saved.is_empty() {
            return 0;
        }
        let restored = self.selection.restore(&saved, &self.catalog);
        log::info!("Restored {restored} of {} saved selections", saved.len());
        self.persist();
        restored
    }

    /// Toggle the product with `key`. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &str) -> bool {
        let Some(product) = self.catalog.get(key).cloned() else {
            log::debug!("Ignoring toggle for unknown product {key}");
            return false;
        };
        let selected = self.selection.toggle(&product);
        self.persist();
        selected
    }

    pub fn remove(&mut self, key: &str) -> bool {
        if !self.selection.remove(key) {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.persist();
    }

    /// Products in the active category whose name, brand or description
    /// contain the query, ignoring case and diacritics.
    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(self.catalog.products(), &self.category, &self.query)
    }

    pub fn products_view(&self) -> ProductsView {
        if self.category.is_empty() {
            return ProductsView::placeholder();
        }
        view::products_view(&self.filtered(), &self.selection)
    }

    pub fn selected_summary(&self) -> SelectedSummary {
        view::selected_summary(&self.selection)
    }

    pub fn selected_products(&self) -> Vec<Product> {
        self.selection.products().cloned().collect()
    }

    fn persist(&self) {
        if let Err(e) = save_selection(&self.slot, &self.selection) {
            log::warn!("Failed to persist selections: {e}");
        }
    }
}

/// Exact category match combined with a normalized substring search.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &str,
    query: &str,
) -> Vec<&'a Product> {
    let query = normalize_text(query);
    products
        .iter()
        .filter(|p| p.category == category)
        .filter(|p| {
            query.is_empty()
                || normalize_text(&format!("{} {} {}", p.name, p.brand, p.description))
                    .contains(&query)
        })
        .collect()
}
