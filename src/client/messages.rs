//! Message service: typed façade over [`Client::execute`] for `POST messages`.

use tokio_util::sync::CancellationToken;

use super::core::Client;
use crate::types::{MessageRequest, MessageResponse};
use crate::{Error, Result};

const MESSAGES_PATH: &str = "messages";

/// Borrowed handle returned by [`Client::messages`].
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    client: &'a Client,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Send a conversation and decode the reply.
    pub async fn send(&self, request: &MessageRequest) -> Result<MessageResponse> {
        request.validate()?;
        let bytes = self
            .client
            .execute("POST", MESSAGES_PATH, request)
            .await?;
        decode_response(&bytes)
    }

    /// [`Messages::send`] that gives up with [`Error::Cancelled`] when `cancel` fires.
    pub async fn send_with_cancel(
        &self,
        request: &MessageRequest,
        cancel: &CancellationToken,
    ) -> Result<MessageResponse> {
        request.validate()?;
        let bytes = self
            .client
            .execute_with_cancel("POST", MESSAGES_PATH, request, cancel)
            .await?;
        decode_response(&bytes)
    }
}

impl Client {
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Shorthand for `client.messages().send(request)`.
    pub async fn send(&self, request: &MessageRequest) -> Result<MessageResponse> {
        self.messages().send(request).await
    }
}

pub(crate) fn decode_response(bytes: &[u8]) -> Result<MessageResponse> {
    serde_json::from_slice(bytes).map_err(|source| Error::Decoding {
        source,
        body: String::from_utf8_lossy(bytes).into_owned(),
    })
}
