//! Chat service
//!
//! Drives the `Conversation` from UI events. Each flow validates and inserts
//! its placeholder synchronously, then awaits the completion call and
//! resolves the placeholder by id.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use skincare_advisor::chat::SELECTIONS_CLEARED;
use skincare_advisor::config::CompletionConfig;
use skincare_advisor::{
    CompletionBackend, Conversation, OpenAiClient, PendingRequest, Product,
};

#[derive(Clone, Copy)]
pub struct ChatState {
    pub conversation: RwSignal<Conversation>,
    pub completion: RwSignal<CompletionConfig>,
}

impl ChatState {
    pub fn new(completion: CompletionConfig) -> Self {
        Self {
            conversation: RwSignal::new(Conversation::new()),
            completion: RwSignal::new(completion),
        }
    }

    fn dispatch(&self, request: PendingRequest) {
        let conversation = self.conversation;
        let client = OpenAiClient::new(self.completion.get_untracked());

        spawn_local(async move {
            let outcome = client.complete(request.messages).await;
            conversation.update(|c| {
                c.resolve(request.id, request.kind, outcome);
            });
        });
    }

    /// Submit `input`. Returns true when the message was accepted, so the
    /// caller can clear its input.
    pub fn send(&self, input: &str, catalog: &[Product]) -> bool {
        let started = self
            .conversation
            .try_update(|c| c.begin_message(input, catalog))
            .and_then(Result::ok);
        match started {
            Some(request) => {
                self.dispatch(request);
                true
            }
            None => false,
        }
    }

    pub fn generate_routine(&self, selected: &[Product]) {
        let started = self
            .conversation
            .try_update(|c| c.begin_routine(selected))
            .and_then(Result::ok);
        if let Some(request) = started {
            self.dispatch(request);
        }
    }

    pub fn announce_cleared(&self) {
        self.conversation.update(|c| {
            c.push_assistant(SELECTIONS_CLEARED);
        });
    }

    pub fn clear_notice(&self) {
        self.conversation.update(|c| c.clear_notice());
    }
}

pub fn provide_chat_state(completion: CompletionConfig) -> ChatState {
    let state = ChatState::new(completion);
    provide_context(state);
    state
}

pub fn use_chat_state() -> ChatState {
    expect_context::<ChatState>()
}
