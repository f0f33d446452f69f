//! End-to-end tests for `DeepSeekClient::chat` against a local mock API.

mod common;

use std::time::Duration;

use deepseek_client::config::ClientConfig;
use deepseek_client::llm::{first_choice_content, ChatMessage, DeepSeekClient};
use deepseek_client::Error;
use serde_json::json;

fn client_for(base_url: &str) -> DeepSeekClient {
    let config = ClientConfig::new("sk-test-key")
        .unwrap()
        .with_base_url(base_url)
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    DeepSeekClient::new(config).unwrap()
}

#[tokio::test]
async fn chat_posts_the_expected_request_and_returns_the_json() {
    let reply = json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "I'm doing well, thanks!"},
            "finish_reason": "stop"
        }]
    });
    let server = common::serve_once("200 OK", &reply.to_string());
    let client = client_for(&server.base_url());

    let response = client
        .chat_with_defaults(&[ChatMessage::user("Hello, how are you?")])
        .await
        .unwrap();

    assert_eq!(response, reply);
    assert_eq!(first_choice_content(&response), Some("I'm doing well, thanks!"));

    let request = server.captured();
    assert_eq!(request.request_line, "POST /v1/chat/completions HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("Bearer sk-test-key"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(
        request.body,
        r#"{"model":"deepseek-chat","messages":[{"role":"user","content":"Hello, how are you?"}],"temperature":0.7}"#
    );
}

#[tokio::test]
async fn chat_preserves_message_order_and_passes_parameters_through() {
    let server = common::serve_once("200 OK", r#"{"ok":true}"#);
    let client = client_for(&server.base_url());

    let messages = vec![
        ChatMessage::system("You are a pirate."),
        ChatMessage::user("Where is the treasure?"),
        ChatMessage::assistant("Arr, I'll never tell."),
        ChatMessage::user("Please?"),
    ];
    client
        .chat(&messages, "deepseek-reasoner", 1.25)
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&server.captured().body).unwrap();
    assert_eq!(body["model"], "deepseek-reasoner");
    assert_eq!(body["temperature"], 1.25);
    let sent: Vec<ChatMessage> = serde_json::from_value(body["messages"].clone()).unwrap();
    assert_eq!(sent, messages);
}

#[tokio::test]
async fn non_success_status_is_a_transport_failure() {
    let server = common::serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"Authentication Fails"}}"#,
    );
    let client = client_for(&server.base_url());

    let err = client
        .chat_with_defaults(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        Error::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Authentication Fails"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.captured();
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = common::serve_once("200 OK", "<html>not json</html>");
    let client = client_for(&server.base_url());

    let err = client
        .chat_with_defaults(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert!(!err.is_transport());
    server.captured();
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let client = client_for(&common::closed_base_url());

    let err = client
        .chat_with_defaults(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn slow_server_hits_the_configured_timeout() {
    let base_url = common::serve_silence(Duration::from_secs(3));
    let config = ClientConfig::new("sk-test-key")
        .unwrap()
        .with_base_url(&base_url)
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let client = DeepSeekClient::new(config).unwrap();

    let err = client
        .chat_with_defaults(&[ChatMessage::user("hi")])
        .await
        .unwrap_err();

    match err {
        Error::Transport(source) => assert!(source.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_conversation_is_rejected_before_any_request() {
    let client = client_for(&common::closed_base_url());

    let err = client.chat_with_defaults(&[]).await.unwrap_err();

    assert!(matches!(err, Error::EmptyConversation));
}

#[test]
fn missing_credential_fails_at_construction() {
    let result = ClientConfig::new("").and_then(DeepSeekClient::new);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn client_debug_output_hides_the_key() {
    let client = client_for("http://127.0.0.1:9/v1");
    let printed = format!("{:?}", client);
    assert!(!printed.contains("sk-test-key"));
    assert!(printed.contains("/v1/chat/completions"));
}
