#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod services;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Route `log` records from the core crate into the tracing subscriber
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        web_sys::console::warn_1(&format!("log bridge not installed: {e}").into());
    }

    log::info!("Starting {} {}", skincare_advisor::NAME, skincare_advisor::VERSION);

    // Remove loading placeholder
    if let Some(loader) = bindings::document().and_then(|d| d.get_element_by_id("app-loading")) {
        loader.remove();
    }

    leptos::mount::mount_to_body(app::App);
}
