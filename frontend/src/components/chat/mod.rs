pub mod chat_message;

pub use chat_message::ChatMessage;

use leptos::ev;
use leptos::prelude::*;

use skincare_advisor::view::chat_lines;

use crate::services::chat_service::use_chat_state;
use crate::services::picker_service::use_picker_state;

/// Chat window, inline notice and message form.
#[component]
pub fn Chat() -> impl IntoView {
    let chat = use_chat_state();
    let picker = use_picker_state();
    let message_input = RwSignal::new(String::new());

    let lines = Memo::new(move |_| chat.conversation.with(|c| chat_lines(c.entries())));
    let notice = Memo::new(move |_| chat.conversation.with(|c| c.notice().map(String::from)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let input = message_input.get_untracked();
        let catalog = picker
            .picker
            .with_untracked(|p| p.catalog().products().to_vec());
        if chat.send(&input, &catalog) {
            message_input.set(String::new());
        }
    };

    view! {
        <div id="chatWindow" class="chat-window">
            <For
                each=move || lines.get()
                key=|line| (line.id, line.pending)
                children=move |line| view! { <ChatMessage line=line /> }
            />
        </div>
        {move || {
            notice
                .get()
                .map(|text| view! { <div class="chat-error" role="alert">{text}</div> })
        }}
        <form id="chatForm" class="chat-form" on:submit=on_submit>
            <input
                type="text"
                id="userInput"
                placeholder="Ask me about products or routines..."
                autocomplete="off"
                prop:value=move || message_input.get()
                on:input=move |ev| {
                    message_input.set(event_target_value(&ev));
                    if notice.get_untracked().is_some() {
                        chat.clear_notice();
                    }
                }
            />
            <button type="submit" id="sendBtn">"Send"</button>
        </form>
    }
}
