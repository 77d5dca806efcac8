//! Error types for the advisor core.
//!
//! One enum per concern, using thiserror. The UI never matches on most of
//! these; they are rendered to text at the point where a conversation entry
//! or log line is produced.

use thiserror::Error;

/// Errors raised while fetching or decoding the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog location could not be resolved to a URL.
    #[error("Invalid catalog URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Catalog request failed with status {0}")]
    Status(u16),

    /// The body was not a `{ "products": [...] }` document.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the chat-completion client.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key configured.
    #[error("Missing OpenAI API key. Set completion.api_key in config.toml or define a global OPENAI_API_KEY before the app loads.")]
    MissingCredential,

    /// A key is configured but does not look like a real one.
    #[error("Invalid OpenAI API key provided. Make sure the key is your real key (starts with \"sk-\").")]
    InvalidCredential,

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("OpenAI API error: {status} {body}")]
    Api { status: u16, body: String },

    /// Response body was not valid JSON for a completion.
    #[error("Malformed completion response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the selection storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot is not reachable (no window, storage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the slot failed (quota, security policy).
    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reasons a chat action was refused before any request was made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Please enter a message.")]
    EmptyInput,

    /// A reply is still pending; actions are serialized.
    #[error("Please wait for the current reply to finish.")]
    Busy,

    /// Routine requested with an empty selection.
    #[error("Please select at least one product before generating a routine.")]
    NothingSelected,
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
