//! Chat Service Tests
//!
//! Synchronous parts of the chat flows: validation, notices and the
//! clear-selections announcement. No request is dispatched here.

use leptos::prelude::*;
use skincare_advisor::config::CompletionConfig;
use skincare_advisor::MessageRole;
use skincare_advisor_frontend::services::chat_service::ChatState;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_blank_message_is_rejected_with_notice() {
    let state = ChatState::new(CompletionConfig::default());

    assert!(!state.send("   ", &[]));
    assert!(!state.send("", &[]));

    state.conversation.with(|c| {
        assert_eq!(c.len(), 1);
        assert_eq!(c.notice(), Some("Please enter a message."));
    });
}

#[wasm_bindgen_test]
fn test_clear_notice() {
    let state = ChatState::new(CompletionConfig::default());
    state.send("", &[]);
    state.clear_notice();
    assert_eq!(state.conversation.with(|c| c.notice().map(String::from)), None);
}

#[wasm_bindgen_test]
fn test_routine_without_selection_appends_reminder() {
    let state = ChatState::new(CompletionConfig::default());
    state.generate_routine(&[]);

    state.conversation.with(|c| {
        let last = c.entries().last().unwrap();
        assert_eq!(last.role, MessageRole::Assistant);
        assert_eq!(
            last.content,
            "Please select at least one product before generating a routine."
        );
        assert!(!c.is_busy());
    });
}

#[wasm_bindgen_test]
fn test_announce_cleared() {
    let state = ChatState::new(CompletionConfig::default());
    state.announce_cleared();

    let last = state
        .conversation
        .with(|c| c.entries().last().map(|e| e.content.clone()));
    assert_eq!(last.as_deref(), Some("All selections cleared."));
}
