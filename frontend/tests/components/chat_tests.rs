//! Chat Component Tests
//!
//! Rendered chat entries carry a role label ahead of their content.

use leptos::prelude::*;
use skincare_advisor::view::chat_lines;
use skincare_advisor::Conversation;
use skincare_advisor_frontend::components::chat::ChatMessage;
use wasm_bindgen_test::*;

fn mount_lines(container_id: &'static str, conversation: Conversation) -> web_sys::Element {
    let lines = chat_lines(conversation.entries());
    leptos::mount::mount_to_body(move || {
        let lines = lines.clone();
        view! {
            <div id=container_id>
                {lines
                    .into_iter()
                    .map(|line| view! { <ChatMessage line=line /> })
                    .collect_view()}
            </div>
        }
    });
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .expect("mounted container")
}

#[wasm_bindgen_test]
fn test_entries_render_role_label() {
    let mut conversation = Conversation::new();
    conversation.push_assistant("Use a gentle cleanser.");
    let container = mount_lines("chat-role-label-test", conversation);

    let labels = container.query_selector_all("strong").unwrap();
    assert_eq!(labels.length(), 2);
    assert_eq!(labels.item(0).unwrap().text_content().as_deref(), Some("system:"));
    assert_eq!(labels.item(1).unwrap().text_content().as_deref(), Some("assistant:"));

    let reply = container.query_selector(".assistant-msg").unwrap().unwrap();
    let text = reply.text_content().unwrap_or_default();
    assert!(text.starts_with("assistant:"));
    assert!(text.contains("Use a gentle cleanser."));
}

#[wasm_bindgen_test]
fn test_multiline_content_uses_line_breaks() {
    let mut conversation = Conversation::new();
    conversation.push_assistant("1. Cleanse\n2. Tone");
    let container = mount_lines("chat-line-break-test", conversation);

    let reply = container.query_selector(".assistant-msg").unwrap().unwrap();
    assert_eq!(reply.query_selector_all("br").unwrap().length(), 1);
}
