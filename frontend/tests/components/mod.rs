//! Component tests module
//!
//! Components mounted into the test page and inspected through the DOM.

pub mod chat_tests;
