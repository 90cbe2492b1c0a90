use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;
use uuid::Uuid;

use crate::config::{ClientConfig, Credential};
use crate::error::{Error, ErrorContext};
use crate::interceptors::{InterceptorPipeline, RequestContext};
use crate::transport::{HttpRequest, HttpSender};
use crate::Result;

/// Transport client: holds the credential and performs one HTTP exchange per call.
///
/// Cheap to clone; clones share the sender and the immutable credential.
#[derive(Clone)]
pub struct Client {
    pub(crate) credential: Credential,
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) headers: HeaderMap,
    pub(crate) sender: Arc<dyn HttpSender>,
    pub(crate) interceptors: Arc<InterceptorPipeline>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("credential", &self.credential)
            .field("base_url", &self.config.base_url.as_str())
            .field("api_version", &self.config.api_version)
            .field("interceptors", &self.interceptors.interceptors.len())
            .finish()
    }
}

impl Client {
    /// Create a client with default configuration.
    ///
    /// Fails with a configuration error when `api_key` is empty; no network
    /// call is made.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        crate::client::builder::ClientBuilder::new()
            .credential(Credential::new(api_key)?)
            .build()
    }

    pub fn builder() -> crate::client::builder::ClientBuilder {
        crate::client::builder::ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request to `path` (relative to the base URL) with `body`
    /// encoded as JSON, and return the raw body of a `200 OK` response.
    ///
    /// Single attempt: any other status becomes [`Error::Http`] carrying the
    /// status and body text.
    pub async fn execute<B>(&self, method: &str, path: &str, body: &B) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        let method = parse_method(method)?;
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body).map_err(Error::Encoding)?;

        let request = HttpRequest {
            method: method.clone(),
            url: url.clone(),
            headers: self.headers.clone(),
            body: Bytes::from(payload),
        };
        let ctx = RequestContext {
            method,
            url,
            request_id: Uuid::new_v4().to_string(),
        };

        tracing::debug!(
            request_id = %ctx.request_id,
            method = %ctx.method,
            url = %ctx.url,
            "executing request"
        );

        let sender = &self.sender;
        let outgoing = &request;
        let response = self
            .interceptors
            .execute(&ctx, &request, move || async move {
                sender
                    .send(outgoing.clone())
                    .await
                    .map_err(Error::Transport)
            })
            .await?;

        if response.status != 200 {
            tracing::debug!(
                request_id = %ctx.request_id,
                status = response.status,
                "non-success status"
            );
            return Err(Error::Http {
                status: response.status,
                body: response.body_text(),
            });
        }

        Ok(response.body)
    }

    /// Like [`Client::execute`], abandoned with [`Error::Cancelled`] as soon as
    /// `cancel` fires.
    pub async fn execute_with_cancel<B>(
        &self,
        method: &str,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            res = self.execute(method, path, body) => res,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        // A leading '/' would replace the base path ("/v1/") instead of extending it.
        let path = path.trim_start_matches('/');
        self.config.base_url.join(path).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid request path: {e}"),
                ErrorContext::new()
                    .with_field_path("path")
                    .with_details(path.to_string())
                    .with_source("client"),
            )
        })
    }
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_uppercase().as_bytes()).map_err(|_| {
        Error::configuration_with_context(
            "invalid HTTP method",
            ErrorContext::new()
                .with_field_path("method")
                .with_details(method.to_string())
                .with_source("client"),
        )
    })
}
