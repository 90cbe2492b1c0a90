//! Happy-path exchanges against a mock server.

use claude_messages::{
    CancellationToken, ContentBlock, Message, MessageContent, MessageRequest, Role, StopReason,
};
use serde_json::json;

use super::mock_server::{MockServerFixture, OK_BODY};

#[tokio::test]
async fn test_send_decodes_reply() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_messages(200, OK_BODY).await;
    let client = fixture.create_test_client().unwrap();

    let req = MessageRequest::new("claude-1.3", vec![Message::user("Hello there.")], 100);
    let resp = client.send(&req).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.id, "msg_1");
    assert_eq!(resp.content[0].as_text(), Some("Hi"));
    assert_eq!(resp.usage.output_tokens, 2);
    assert_eq!(resp.stop_reason, Some(StopReason::EndTurn));
    assert_eq!(resp.text(), "Hi");
}

#[tokio::test]
async fn test_wire_body_matches_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_messages_with_body(
            json!({
                "model": "claude-1.3",
                "messages": [
                    {"role": "user", "content": "Hello there."},
                    {"role": "assistant", "content": "Hi, I'm Claude. How can I help you?"},
                    {"role": "user", "content": "Can you explain LLMs in plain English?"}
                ],
                "max_tokens": 100,
                "temperature": 0.7
            }),
            OK_BODY,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let req = MessageRequest::new(
        "claude-1.3",
        vec![
            Message::user("Hello there."),
            Message::assistant("Hi, I'm Claude. How can I help you?"),
            Message::user("Can you explain LLMs in plain English?"),
        ],
        100,
    )
    .temperature(0.7);

    client.send(&req).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_multimodal_content_is_sent_as_blocks() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_messages_with_body(
            json!({
                "model": "claude-1.3",
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "aGk="}},
                        {"type": "text", "text": "Describe this."}
                    ]
                }],
                "max_tokens": 50
            }),
            OK_BODY,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let req = MessageRequest::new(
        "claude-1.3",
        vec![Message::with_content(
            Role::User,
            MessageContent::blocks(vec![
                ContentBlock::image_base64("aGk=", "image/png"),
                ContentBlock::text("Describe this."),
            ]),
        )],
        50,
    );

    client.send(&req).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_execute_returns_raw_bytes() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_messages(200, OK_BODY).await;
    let client = fixture.create_test_client().unwrap();

    let bytes = client
        .execute("post", "messages", &json!({"model": "claude-1.3"}))
        .await
        .unwrap();
    assert_eq!(&bytes[..], OK_BODY.as_bytes());
}

#[tokio::test]
async fn test_send_with_live_token_completes() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_messages(200, OK_BODY).await;
    let client = fixture.create_test_client().unwrap();

    let req = MessageRequest::new("claude-1.3", vec![Message::user("Hi")], 10);
    let resp = client
        .messages()
        .send_with_cancel(&req, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(resp.text(), "Hi");
}
