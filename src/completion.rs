//! Chat-completion client
//!
//! OpenAI-compatible `chat/completions` over reqwest. On wasm32 reqwest
//! uses the browser fetch API, so the same client serves the page and the
//! native tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::error::{CompletionError, CompletionResult};

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message sent to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// First choice's message content, if any.
fn first_reply(body: &str) -> CompletionResult<Option<String>> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content))
}

// ============================================================================
// Credential
// ============================================================================

/// A bearer credential that passed the pre-flight check.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Missing or blank → `MissingCredential`; not `sk-…` → `InvalidCredential`.
    pub fn parse(key: Option<&str>) -> CompletionResult<Self> {
        let key = key.map(str::trim).filter(|k| !k.is_empty());
        let Some(key) = key else {
            return Err(CompletionError::MissingCredential);
        };
        if !key.starts_with("sk-") {
            return Err(CompletionError::InvalidCredential);
        }
        Ok(Self(key.to_string()))
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Something that turns a message list into a reply.
///
/// `Ok(None)` means the endpoint answered but produced no content.
#[async_trait(?Send)]
pub trait CompletionBackend {
    async fn complete(&self, messages: Vec<ChatMessage>) -> CompletionResult<Option<String>>;
}

/// OpenAI-compatible chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: CompletionConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// The preamble (if any) followed by `messages`.
    fn request_messages(&self, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
        if self.config.preamble.is_empty() {
            return messages;
        }
        let mut all = Vec::with_capacity(messages.len() + 1);
        all.push(ChatMessage::system(self.config.preamble.clone()));
        all.extend(messages);
        all
    }
}

#[async_trait(?Send)]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> CompletionResult<Option<String>> {
        let credential = Credential::parse(self.config.api_key.as_deref())?;

        let payload = CompletionRequest {
            model: &self.config.model,
            messages: self.request_messages(messages),
            max_tokens: self.config.max_tokens,
        };
        log::debug!(
            "Sending {} messages to {} ({})",
            payload.messages.len(),
            self.config.endpoint,
            self.config.model
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::AUTHORIZATION, credential.bearer())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!("Completion request failed with status {}", status.as_u16());
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        first_reply(&body)
    }
}
