//! Conversation state and the two chat flows.
//!
//! Both flows follow the same protocol: validate, append a pending assistant
//! placeholder, hand a `PendingRequest` to the caller, and later `resolve`
//! the placeholder exactly once by its `EntryId`. The split lets the
//! frontend await the network call between two signal updates; `send_message`
//! and `generate_routine` run the whole thing against a backend directly.

use serde::Serialize;

use crate::catalog::Product;
use crate::completion::{ChatMessage, CompletionBackend, MessageRole};
use crate::error::{ChatError, CompletionError};
use crate::matcher::{build_context_block, match_products};

pub const INITIAL_SYSTEM_MESSAGE: &str = "helpful assistant.";

pub const CHAT_TONE: &str = "You are a friendly, conversational skincare assistant. You can answer questions about skincare, haircare, makeup, fragrance, and related topics. Use a natural tone, keep suggestions concise, and include short tips when appropriate.";

pub const ROUTINE_TONE: &str = "You are a friendly, conversational skincare assistant. Use the provided products to create a concise 3-step skincare routine. Number the steps and include a 1-sentence tip for each step.";

pub const SELECTIONS_CLEARED: &str = "All selections cleared.";

/// Correlation token for a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    pub id: EntryId,
    pub role: MessageRole,
    pub content: String,
    /// Placeholder still waiting for its reply.
    pub pending: bool,
}

/// Which flow produced a request; decides placeholder and fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Chat,
    Routine,
}

impl RequestKind {
    fn placeholder(self) -> &'static str {
        match self {
            RequestKind::Chat => "Generating response...",
            RequestKind::Routine => "Generating routine from selected products...",
        }
    }

    fn empty_reply(self) -> &'static str {
        match self {
            RequestKind::Chat => "Sorry, I couldn't get a response from the API.",
            RequestKind::Routine => "I couldn't generate a routine from the API.",
        }
    }

    fn error_text(self, err: &CompletionError) -> String {
        match self {
            RequestKind::Chat => format!("Error: {err}"),
            RequestKind::Routine => format!("Error generating routine: {err}"),
        }
    }
}

/// A placeholder waiting for its reply, plus the messages to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: EntryId,
    pub kind: RequestKind,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct RoutineItem<'a> {
    name: Option<&'a str>,
    brand: Option<&'a str>,
    category: Option<&'a str>,
    description: Option<&'a str>,
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// `products = [...]` user message for the routine flow.
pub fn routine_payload(selected: &[Product]) -> String {
    let items: Vec<RoutineItem<'_>> = selected
        .iter()
        .map(|p| RoutineItem {
            name: non_empty(&p.name),
            brand: non_empty(&p.brand),
            category: non_empty(&p.category),
            description: non_empty(&p.description),
        })
        .collect();
    // Serializing borrowed strings and options cannot fail.
    let json = serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string());
    format!("products = {json}")
}

/// The session's conversation. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    entries: Vec<ConversationEntry>,
    next_id: u64,
    in_flight: Option<EntryId>,
    /// Inline notice shown under the chat (at most one).
    notice: Option<String>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// A conversation seeded with the initial system message.
    pub fn new() -> Self {
        let mut conversation = Self {
            entries: Vec::new(),
            next_id: 0,
            in_flight: None,
            notice: None,
        };
        conversation.push(MessageRole::System, INITIAL_SYSTEM_MESSAGE, false);
        conversation
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn entry(&self, id: EntryId) -> Option<&ConversationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn push(&mut self, role: MessageRole, content: impl Into<String>, pending: bool) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ConversationEntry {
            id,
            role,
            content: content.into(),
            pending,
        });
        id
    }

    /// Append a finished assistant message (no request involved).
    pub fn push_assistant(&mut self, content: impl Into<String>) -> EntryId {
        self.push(MessageRole::Assistant, content, false)
    }

    fn guard_busy(&mut self) -> Result<(), ChatError> {
        if self.is_busy() {
            self.notice = Some(ChatError::Busy.to_string());
            return Err(ChatError::Busy);
        }
        Ok(())
    }

    fn open_placeholder(&mut self, kind: RequestKind) -> EntryId {
        let id = self.push(MessageRole::Assistant, kind.placeholder(), true);
        self.in_flight = Some(id);
        id
    }

    /// Start the send-message flow.
    ///
    /// Empty input only sets the inline notice. Otherwise appends the user
    /// entry and the placeholder, and returns the request: chat tone,
    /// catalog context block, then the full history before the placeholder.
    pub fn begin_message(
        &mut self,
        input: &str,
        catalog: &[Product],
    ) -> Result<PendingRequest, ChatError> {
        let input = input.trim();
        if input.is_empty() {
            self.notice = Some(ChatError::EmptyInput.to_string());
            return Err(ChatError::EmptyInput);
        }
        self.guard_busy()?;
        self.notice = None;

        self.push(MessageRole::User, input, false);

        let matched = match_products(catalog, input);
        log::debug!("Message matched {} catalog products", matched.len());

        let mut messages = Vec::with_capacity(self.entries.len() + 2);
        messages.push(ChatMessage::system(CHAT_TONE));
        messages.push(ChatMessage::system(build_context_block(&matched, catalog)));
        messages.extend(self.entries.iter().map(|e| ChatMessage {
            role: e.role,
            content: e.content.clone(),
        }));

        let id = self.open_placeholder(RequestKind::Chat);
        Ok(PendingRequest {
            id,
            kind: RequestKind::Chat,
            messages,
        })
    }

    /// Start the generate-routine flow from the selected products only.
    ///
    /// With nothing selected, appends a reminder from the assistant and
    /// returns `NothingSelected`.
    pub fn begin_routine(&mut self, selected: &[Product]) -> Result<PendingRequest, ChatError> {
        self.guard_busy()?;
        if selected.is_empty() {
            self.push_assistant(ChatError::NothingSelected.to_string());
            return Err(ChatError::NothingSelected);
        }
        self.notice = None;

        let messages = vec![
            ChatMessage::system(ROUTINE_TONE),
            ChatMessage::user(routine_payload(selected)),
        ];
        let id = self.open_placeholder(RequestKind::Routine);
        Ok(PendingRequest {
            id,
            kind: RequestKind::Routine,
            messages,
        })
    }

    /// Overwrite the placeholder `id` with the outcome.
    ///
    /// Returns false if `id` is unknown or already resolved, so a reply is
    /// written at most once.
    pub fn resolve(
        &mut self,
        id: EntryId,
        kind: RequestKind,
        outcome: Result<Option<String>, CompletionError>,
    ) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id && e.pending) else {
            log::warn!("Discarding reply for unknown or settled entry {}", id.0);
            return false;
        };

        entry.content = match outcome {
            Ok(Some(reply)) if !reply.is_empty() => reply,
            Ok(_) => kind.empty_reply().to_string(),
            Err(err) => {
                log::warn!("Completion failed: {err}");
                kind.error_text(&err)
            }
        };
        entry.pending = false;

        if self.in_flight == Some(id) {
            self.in_flight = None;
            if self.notice == Some(ChatError::Busy.to_string()) {
                self.notice = None;
            }
        }
        true
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// Run the send-message flow to completion against `backend`.
pub async fn send_message<B: CompletionBackend + ?Sized>(
    conversation: &mut Conversation,
    backend: &B,
    input: &str,
    catalog: &[Product],
) -> Result<EntryId, ChatError> {
    let request = conversation.begin_message(input, catalog)?;
    let outcome = backend.complete(request.messages).await;
    conversation.resolve(request.id, request.kind, outcome);
    Ok(request.id)
}

/// Run the generate-routine flow to completion against `backend`.
pub async fn generate_routine<B: CompletionBackend + ?Sized>(
    conversation: &mut Conversation,
    backend: &B,
    selected: &[Product],
) -> Result<EntryId, ChatError> {
    let request = conversation.begin_routine(selected)?;
    let outcome = backend.complete(request.messages).await;
    conversation.resolve(request.id, request.kind, outcome);
    Ok(request.id)
}
