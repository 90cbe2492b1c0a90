//! Error surfaces: non-success statuses, malformed replies, unreachable hosts.

use claude_messages::{Client, Error, Message, MessageRequest};

use super::mock_server::{MockServerFixture, OK_BODY};

fn request() -> MessageRequest {
    MessageRequest::new("claude-1.3", vec![Message::user("Hi")], 10)
}

#[tokio::test]
async fn test_unauthorized_surfaces_status_and_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_messages(401, r#"{"error":"unauthorized"}"#)
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client.send(&request()).await.unwrap_err();
    mock.assert_async().await;
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, r#"{"error":"unauthorized"}"#);
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_attempted_once() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_messages(
            529,
            r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#,
        )
        .await;
    let client = fixture.create_test_client().unwrap();

    let err = client.send(&request()).await.unwrap_err();
    mock.assert_async().await;
    assert!(err.is_http_status(529));
    assert_eq!(err.api_error().unwrap().error_type, "overloaded_error");
}

#[tokio::test]
async fn test_other_2xx_is_still_an_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_messages(201, OK_BODY).await;
    let client = fixture.create_test_client().unwrap();

    let err = client.send(&request()).await.unwrap_err();
    assert!(err.is_http_status(201));
}

#[tokio::test]
async fn test_missing_id_is_decoding_error() {
    let mut fixture = MockServerFixture::new().await;
    let body = OK_BODY.replace(r#""id":"msg_1","#, "");
    let _mock = fixture.mock_messages(200, &body).await;
    let client = fixture.create_test_client().unwrap();

    let err = client.send(&request()).await.unwrap_err();
    match err {
        Error::Decoding { body: raw, .. } => assert_eq!(raw, body),
        other => panic!("expected Decoding error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_request_never_hits_network() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_messages_expect(200, OK_BODY, 0).await;
    let client = fixture.create_test_client().unwrap();

    let err = client
        .send(&MessageRequest::new("claude-1.3", vec![], 10))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on the discard port.
    let client = Client::builder()
        .api_key("sk-ant-test")
        .base_url_override("http://127.0.0.1:9/v1")
        .build()
        .unwrap();

    let err = client.send(&request()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
