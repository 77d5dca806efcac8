//! Picker service
//!
//! Holds the catalog snapshot, filters and selections in one signal. The
//! catalog is fetched at startup and again on every category change; search
//! changes filter the snapshot in place.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use skincare_advisor::catalog::resolve_url;
use skincare_advisor::error::CatalogResult;
use skincare_advisor::{Catalog, CatalogLoader, Picker};

use crate::bindings::LocalStorageSlot;

/// Where the catalog document lives: a path resolved against the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogSource {
    pub page: String,
    pub path: String,
}

async fn fetch_catalog(source: &CatalogSource) -> CatalogResult<Catalog> {
    let url = resolve_url(&source.page, &source.path)?;
    CatalogLoader::new(reqwest::Client::new(), url).load().await
}

#[derive(Clone, Copy)]
pub struct PickerState {
    pub picker: RwSignal<Picker<LocalStorageSlot>>,
    pub source: RwSignal<CatalogSource>,
    /// True until the first catalog load settles.
    pub is_loading: RwSignal<bool>,
}

impl PickerState {
    pub fn new(slot: LocalStorageSlot) -> Self {
        Self {
            picker: RwSignal::new(Picker::new(slot)),
            source: RwSignal::new(CatalogSource::default()),
            is_loading: RwSignal::new(true),
        }
    }

    /// Initial load: fetch the catalog, then restore saved selections.
    ///
    /// A failed load is logged and leaves the catalog empty.
    pub fn load(&self, source: CatalogSource) {
        let picker = self.picker;
        let is_loading = self.is_loading;
        self.source.set(source.clone());

        spawn_local(async move {
            match fetch_catalog(&source).await {
                Ok(catalog) => picker.update(|p| {
                    p.set_catalog(catalog);
                    p.restore_from_storage();
                }),
                Err(e) => log::error!("Failed to load products: {e}"),
            }
            is_loading.set(false);
        });
    }

    /// Switch category and refresh the snapshot.
    pub fn set_category(&self, category: String) {
        self.picker.update(|p| p.set_category(category));

        let picker = self.picker;
        let source = self.source.get_untracked();
        spawn_local(async move {
            match fetch_catalog(&source).await {
                Ok(catalog) => picker.update(|p| p.set_catalog(catalog)),
                Err(e) => log::warn!("Catalog refresh failed, keeping previous products: {e}"),
            }
        });
    }

    pub fn set_query(&self, query: String) {
        self.picker.update(|p| p.set_query(query));
    }

    pub fn toggle(&self, key: &str) {
        self.picker.update(|p| {
            p.toggle(key);
        });
    }

    pub fn remove(&self, key: &str) {
        self.picker.update(|p| {
            p.remove(key);
        });
    }

    pub fn clear(&self) {
        self.picker.update(|p| p.clear());
    }
}

pub fn provide_picker_state(slot: LocalStorageSlot) -> PickerState {
    let state = PickerState::new(slot);
    provide_context(state);
    state
}

pub fn use_picker_state() -> PickerState {
    expect_context::<PickerState>()
}
