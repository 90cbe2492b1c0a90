//! Synchronous client.
//!
//! Each call blocks the calling thread until the response body is read or
//! the exchange fails. The async client is driven on a private
//! current-thread runtime, so these methods must not be called from inside
//! an async context.

use bytes::Bytes;
use serde::Serialize;
use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;

use crate::transport::TransportError;
use crate::types::{MessageRequest, MessageResponse};
use crate::{Error, Result};

pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Client {
    /// Create a client with default configuration. Fails on an empty key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_async(crate::Client::new(api_key)?)
    }

    /// Wrap an already configured async client.
    pub fn from_async(inner: crate::Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::Transport(TransportError::Other(format!(
                    "failed to start runtime: {e}"
                )))
            })?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &crate::Client {
        &self.inner
    }

    /// Blocking [`crate::Client::execute`].
    pub fn execute<B>(&self, method: &str, path: &str, body: &B) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        self.runtime.block_on(self.inner.execute(method, path, body))
    }

    /// Blocking [`crate::Client::send`].
    pub fn send(&self, request: &MessageRequest) -> Result<MessageResponse> {
        self.runtime.block_on(self.inner.send(request))
    }

    /// Blocking send that another thread can abort through `cancel`.
    pub fn send_with_cancel(
        &self,
        request: &MessageRequest,
        cancel: &CancellationToken,
    ) -> Result<MessageResponse> {
        self.runtime
            .block_on(self.inner.messages().send_with_cancel(request, cancel))
    }
}

impl crate::client::builder::ClientBuilder {
    /// Build a [`Client`] for synchronous use.
    pub fn build_blocking(self) -> Result<Client> {
        Client::from_async(self.build()?)
    }
}
