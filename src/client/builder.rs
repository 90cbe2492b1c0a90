use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::sync::Arc;

use crate::client::core::Client;
use crate::config::{ClientConfig, Credential};
use crate::error::{Error, ErrorContext};
use crate::interceptors::{Interceptor, InterceptorPipeline};
use crate::transport::{HttpSender, ReqwestSender};
use crate::Result;

pub(crate) const API_KEY_HEADER: &str = "x-api-key";
pub(crate) const API_VERSION_HEADER: &str = "anthropic-version";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct ClientBuilder {
    credential: Option<Result<Credential>>,
    config: ClientConfig,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
    interceptors: InterceptorPipeline,
    sender: Option<Arc<dyn HttpSender>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            credential: None,
            config: ClientConfig::default(),
            base_url_override: None,
            interceptors: InterceptorPipeline::new(),
            sender: None,
        }
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(Ok(credential));
        self
    }

    /// Shorthand for `credential(Credential::new(key)?)`; validation is
    /// deferred to `build()`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credential = Some(Credential::new(key));
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the configured base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Add an interceptor. Hooks run in the order they were added.
    pub fn interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Replace the network layer (custom reqwest client, test doubles).
    pub fn sender(mut self, sender: Arc<dyn HttpSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Build the client. Performs no network I/O.
    pub fn build(self) -> Result<Client> {
        let credential = self.credential.unwrap_or_else(|| {
            Err(Error::configuration_with_context(
                "API key not found",
                ErrorContext::new()
                    .with_details("supply a non-empty credential")
                    .with_source("client_builder"),
            ))
        })?;

        let mut config = self.config;
        if let Some(raw) = self.base_url_override.as_deref() {
            config.base_url = crate::config::parse_base_url(raw)?;
        }

        let headers = default_headers(&credential, &config)?;

        let sender: Arc<dyn HttpSender> = match self.sender {
            Some(sender) => sender,
            None => Arc::new(ReqwestSender::new(&config).map_err(|e| {
                Error::configuration_with_context(
                    format!("failed to build HTTP client: {e}"),
                    ErrorContext::new()
                        .with_details("check user_agent and timeout settings")
                        .with_source("client_builder"),
                )
            })?),
        };

        Ok(Client {
            credential,
            config: Arc::new(config),
            headers,
            sender,
            interceptors: Arc::new(self.interceptors),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed headers sent with every request.
fn default_headers(credential: &Credential, config: &ClientConfig) -> Result<HeaderMap> {
    let invalid = |field: &str| {
        Error::configuration_with_context(
            "value is not a valid HTTP header",
            ErrorContext::new()
                .with_field_path(field.to_string())
                .with_source("client_builder"),
        )
    };

    let mut api_key =
        HeaderValue::from_str(credential.expose()).map_err(|_| invalid("credential"))?;
    api_key.set_sensitive(true);
    let version =
        HeaderValue::from_str(&config.api_version).map_err(|_| invalid("api_version"))?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
    headers.insert(HeaderName::from_static(API_VERSION_HEADER), version);
    Ok(headers)
}
