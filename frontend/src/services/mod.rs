pub mod chat_service;
pub mod layout_service;
pub mod picker_service;
