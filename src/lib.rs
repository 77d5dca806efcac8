//! Skincare Advisor - product picker and routine assistant
//!
//! Core library holding the catalog, selection store, persistence,
//! product matching and chat-completion logic. Nothing in here touches
//! the DOM; the Leptos frontend drives these types from reactive signals.

pub mod catalog;
pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
pub mod matcher;
pub mod persistence;
pub mod picker;
pub mod selection;
pub mod text;
pub mod view;

pub use catalog::{Catalog, CatalogLoader, Product};
pub use chat::{Conversation, ConversationEntry, EntryId, PendingRequest, RequestKind};
pub use completion::{ChatMessage, CompletionBackend, Credential, MessageRole, OpenAiClient};
pub use config::AppConfig;
pub use error::{CatalogError, ChatError, CompletionError, StorageError};
pub use persistence::{MemorySlot, PersistedRecord, SelectionSlot};
pub use picker::Picker;
pub use selection::SelectionStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
