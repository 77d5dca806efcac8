//! Browser bindings: storage slot, page globals and DOM helpers.

mod dom;
mod globals;
mod storage;

pub use dom::{document, ensure_style, set_body_dir};
pub use globals::{global_api_key, page_href};
pub use storage::LocalStorageSlot;
