//! Chat-completion client against a mock endpoint.

use serde_json::json;
use skincare_advisor::config::CompletionConfig;
use skincare_advisor::{ChatMessage, CompletionBackend, CompletionError, OpenAiClient};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn client_for(server: &MockServer, api_key: Option<&str>) -> OpenAiClient {
    OpenAiClient::new(CompletionConfig {
        endpoint: format!("{}/v1/chat/completions", server.uri()),
        api_key: api_key.map(String::from),
        preamble: String::new(),
        ..CompletionConfig::default()
    })
}

#[tokio::test]
async fn test_sends_bearer_model_and_token_cap() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-search-preview",
            "max_tokens": 700,
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("sk-test"));
    let reply = client.complete(vec![ChatMessage::user("hello")]).await.unwrap();
    assert_eq!(reply.as_deref(), Some("Hi there"));
}

#[tokio::test]
async fn test_preamble_is_first_message() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": "search first"},
                {"role": "user", "content": "hello"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(CompletionConfig {
        endpoint: format!("{}/v1/chat/completions", server.uri()),
        api_key: Some("sk-test".into()),
        preamble: "search first".into(),
        ..CompletionConfig::default()
    });
    let reply = client.complete(vec![ChatMessage::user("hello")]).await.unwrap();
    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_error_status_carries_body() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("sk-wrong"));
    let err = client
        .complete(vec![ChatMessage::user("hello")])
        .await
        .unwrap_err();
    match err {
        CompletionError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad key");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_or_invalid_key_makes_no_request() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let missing = client_for(&server, None);
    assert!(matches!(
        missing.complete(vec![ChatMessage::user("hi")]).await,
        Err(CompletionError::MissingCredential)
    ));

    let invalid = client_for(&server, Some("not-a-key"));
    assert!(matches!(
        invalid.complete(vec![ChatMessage::user("hi")]).await,
        Err(CompletionError::InvalidCredential)
    ));
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("sk-test"));
    assert!(matches!(
        client.complete(vec![ChatMessage::user("hi")]).await,
        Err(CompletionError::Json(_))
    ));
}
