//! Picker Service Tests
//!
//! Selection mutations through the service write the localStorage slot.

use leptos::prelude::*;
use skincare_advisor::{Catalog, Product, SelectionSlot};
use skincare_advisor_frontend::bindings::LocalStorageSlot;
use skincare_advisor_frontend::services::picker_service::PickerState;
use wasm_bindgen_test::*;

fn state_with_catalog(slot_key: &str) -> PickerState {
    let state = PickerState::new(LocalStorageSlot::new(slot_key));
    state.picker.update(|p| {
        p.set_catalog(Catalog::new(vec![
            Product::new("Gel Cleanser", "CeraVe", "cleanser").with_id("1"),
            Product::new("Night Cream", "Garnier", "moisturizer").with_id("2"),
        ]))
    });
    state
}

#[wasm_bindgen_test]
fn test_toggle_persists_to_local_storage() {
    let state = state_with_catalog("picker-test-toggle");
    state.toggle("2");

    let raw = LocalStorageSlot::new("picker-test-toggle").read().unwrap();
    assert!(raw.contains("Night Cream"));
    assert!(state.picker.with(|p| p.selection().contains("2")));
}

#[wasm_bindgen_test]
fn test_remove_and_clear() {
    let state = state_with_catalog("picker-test-clear");
    state.toggle("1");
    state.toggle("2");
    state.remove("1");
    assert_eq!(state.picker.with(|p| p.selection().len()), 1);

    state.clear();
    assert!(state.picker.with(|p| p.selection().is_empty()));
    assert_eq!(
        LocalStorageSlot::new("picker-test-clear").read().as_deref(),
        Some("[]")
    );
}

#[wasm_bindgen_test]
fn test_query_filters_snapshot() {
    let state = state_with_catalog("picker-test-query");
    state.picker.update(|p| p.set_category("cleanser"));
    state.set_query("CERAVE".to_string());
    assert_eq!(state.picker.with(|p| p.filtered().len()), 1);
    state.set_query("night".to_string());
    assert_eq!(state.picker.with(|p| p.filtered().len()), 0);
}
