//! Service tests module
//!
//! Frontend service tests using wasm-bindgen-test for browser testing.

pub mod chat_service_tests;
pub mod layout_service_tests;
pub mod picker_service_tests;
