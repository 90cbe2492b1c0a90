//! Mock HTTP server setup for integration tests

use claude_messages::{Client, ClientBuilder};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const TEST_KEY: &str = "sk-ant-test";

pub const OK_BODY: &str = r#"{"id":"msg_1","type":"message","role":"assistant","content":[{"type":"text","text":"Hi"}],"model":"claude-1.3","stop_reason":"end_turn","usage":{"input_tokens":5,"output_tokens":2}}"#;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/v1", server.url());
        Self { server, base_url }
    }

    /// Builder pointed at the mock server via `base_url_override`.
    pub fn builder(&self) -> ClientBuilder {
        Client::builder()
            .api_key(TEST_KEY)
            .base_url_override(&self.base_url)
    }

    pub fn create_test_client(&self) -> claude_messages::Result<Client> {
        self.builder().build()
    }

    /// Mock `POST /v1/messages`, requiring the fixed headers. Expects one hit.
    pub async fn mock_messages(&mut self, status: usize, body: &str) -> Mock {
        self.mock_messages_expect(status, body, 1).await
    }

    pub async fn mock_messages_expect(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", "/v1/messages")
            .match_header("content-type", "application/json")
            .match_header("x-api-key", TEST_KEY)
            .match_header("anthropic-version", "2023-06-01")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Like `mock_messages`, additionally requiring an exact JSON body.
    pub async fn mock_messages_with_body(
        &mut self,
        expected: serde_json::Value,
        body: &str,
    ) -> Mock {
        self.server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", TEST_KEY)
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
