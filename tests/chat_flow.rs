//! Send-message and generate-routine flows against a scripted backend.

use std::cell::RefCell;

use async_trait::async_trait;
use skincare_advisor::chat::{generate_routine, send_message, CHAT_TONE, ROUTINE_TONE};
use skincare_advisor::error::CompletionResult;
use skincare_advisor::{
    ChatError, ChatMessage, CompletionBackend, CompletionError, Conversation, MessageRole,
    Product,
};

enum Reply {
    Text(&'static str),
    Empty,
    Fail,
}

/// Backend that answers with a fixed reply and records every request.
struct ScriptedBackend {
    reply: Reply,
    requests: RefCell<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn last_request(&self) -> Vec<ChatMessage> {
        self.requests.borrow().last().cloned().unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, messages: Vec<ChatMessage>) -> CompletionResult<Option<String>> {
        self.requests.borrow_mut().push(messages);
        match self.reply {
            Reply::Text(text) => Ok(Some(text.to_string())),
            Reply::Empty => Ok(None),
            Reply::Fail => Err(CompletionError::Api {
                status: 503,
                body: "unavailable".into(),
            }),
        }
    }
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new("Gel Cleanser", "CeraVe", "cleanser").with_id("1"),
        Product::new("Night Cream", "Garnier", "moisturizer").with_id("2"),
    ]
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_send_appends_user_and_reply() {
    init_logging();
    let backend = ScriptedBackend::new(Reply::Text("Try the Gel Cleanser."));
    let mut conversation = Conversation::new();

    let id = send_message(&mut conversation, &backend, "which gel?", &catalog())
        .await
        .unwrap();

    assert_eq!(conversation.len(), 3);
    let entries = conversation.entries();
    assert_eq!(entries[1].role, MessageRole::User);
    assert_eq!(entries[1].content, "which gel?");
    assert_eq!(entries[2].id, id);
    assert_eq!(entries[2].content, "Try the Gel Cleanser.");
    assert!(!conversation.is_busy());

    let request = backend.last_request();
    assert_eq!(request[0].content, CHAT_TONE);
    assert!(request[1].content.contains("- Gel Cleanser (CeraVe)"));
    assert!(!request[1].content.contains("Night Cream"));
}

#[tokio::test]
async fn test_failed_send_still_appends_exactly_two() {
    init_logging();
    let backend = ScriptedBackend::new(Reply::Fail);
    let mut conversation = Conversation::new();

    send_message(&mut conversation, &backend, "hello there", &catalog())
        .await
        .unwrap();

    assert_eq!(conversation.len(), 3);
    assert_eq!(
        conversation.entries()[2].content,
        "Error: OpenAI API error: 503 unavailable"
    );
}

#[tokio::test]
async fn test_empty_reply_uses_fallback() {
    let backend = ScriptedBackend::new(Reply::Empty);
    let mut conversation = Conversation::new();

    send_message(&mut conversation, &backend, "hello there", &[])
        .await
        .unwrap();
    assert_eq!(
        conversation.entries()[2].content,
        "Sorry, I couldn't get a response from the API."
    );
    assert!(backend.last_request()[1]
        .content
        .starts_with("No product data available."));
}

#[tokio::test]
async fn test_blank_submit_makes_no_request() {
    let backend = ScriptedBackend::new(Reply::Text("unused"));
    let mut conversation = Conversation::new();

    for _ in 0..3 {
        let result = send_message(&mut conversation, &backend, "  ", &catalog()).await;
        assert_eq!(result, Err(ChatError::EmptyInput));
    }
    assert_eq!(backend.request_count(), 0);
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation.notice(), Some("Please enter a message."));
}

#[tokio::test]
async fn test_history_is_replayed_on_next_send() {
    let backend = ScriptedBackend::new(Reply::Text("Sure."));
    let mut conversation = Conversation::new();

    send_message(&mut conversation, &backend, "first question", &[])
        .await
        .unwrap();
    send_message(&mut conversation, &backend, "second question", &[])
        .await
        .unwrap();

    let history: Vec<_> = backend.last_request()[2..]
        .iter()
        .map(|m| (m.role, m.content.clone()))
        .collect();
    assert_eq!(
        history,
        vec![
            (MessageRole::System, "helpful assistant.".to_string()),
            (MessageRole::User, "first question".to_string()),
            (MessageRole::Assistant, "Sure.".to_string()),
            (MessageRole::User, "second question".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_routine_uses_only_selected_products() {
    init_logging();
    let backend = ScriptedBackend::new(Reply::Text("1. Cleanse\n2. Treat\n3. Moisturize"));
    let mut conversation = Conversation::new();
    send_message(&mut conversation, &backend, "hello there", &[])
        .await
        .unwrap();

    let selected = vec![catalog().remove(1)];
    generate_routine(&mut conversation, &backend, &selected)
        .await
        .unwrap();

    let request = backend.last_request();
    assert_eq!(request.len(), 2);
    assert_eq!(request[0].content, ROUTINE_TONE);
    assert!(request[1].content.starts_with("products = ["));
    assert!(request[1].content.contains("Night Cream"));
    assert!(!request[1].content.contains("Gel Cleanser"));

    assert_eq!(conversation.len(), 4);
    assert_eq!(
        conversation.entries()[3].content,
        "1. Cleanse\n2. Treat\n3. Moisturize"
    );
}

#[tokio::test]
async fn test_routine_without_selection_reminds_user() {
    let backend = ScriptedBackend::new(Reply::Text("unused"));
    let mut conversation = Conversation::new();

    let result = generate_routine(&mut conversation, &backend, &[]).await;
    assert_eq!(result, Err(ChatError::NothingSelected));
    assert_eq!(backend.request_count(), 0);
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.entries()[1].role, MessageRole::Assistant);
}

#[tokio::test]
async fn test_routine_failure_and_empty_wording() {
    let selected = vec![catalog().remove(0)];

    let mut conversation = Conversation::new();
    generate_routine(&mut conversation, &ScriptedBackend::new(Reply::Fail), &selected)
        .await
        .unwrap();
    assert_eq!(
        conversation.entries()[1].content,
        "Error generating routine: OpenAI API error: 503 unavailable"
    );

    generate_routine(&mut conversation, &ScriptedBackend::new(Reply::Empty), &selected)
        .await
        .unwrap();
    assert_eq!(
        conversation.entries()[2].content,
        "I couldn't generate a routine from the API."
    );
}
