//! Layout Service Tests
//!
//! Text direction parsing and toggling.

use leptos::prelude::*;
use skincare_advisor_frontend::services::layout_service::{Direction, LayoutState};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_direction_default_is_rtl() {
    assert_eq!(Direction::default(), Direction::Rtl);
    assert_eq!(Direction::default().as_str(), "rtl");
}

#[wasm_bindgen_test]
fn test_direction_from_config() {
    assert_eq!(Direction::from_config("ltr"), Direction::Ltr);
    assert_eq!(Direction::from_config(" LTR "), Direction::Ltr);
    assert_eq!(Direction::from_config("rtl"), Direction::Rtl);
    assert_eq!(Direction::from_config("sideways"), Direction::Rtl);
}

#[wasm_bindgen_test]
fn test_toggle_direction() {
    let state = LayoutState::new(Direction::Rtl);

    state.toggle_direction();
    assert_eq!(state.direction.get(), Direction::Ltr);

    state.toggle_direction();
    assert_eq!(state.direction.get(), Direction::Rtl);
}
