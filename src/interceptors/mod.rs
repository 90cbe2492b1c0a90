//! Optional interceptor hooks around every HTTP exchange.
//!
//! The transport itself only emits debug-level metadata. Anything that looks
//! at bodies (request/response logging, auditing, test probes) is an
//! interceptor the caller installs explicitly.

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

use crate::transport::{HttpRequest, HttpResponse};
use crate::Error;

/// Per-call context passed to interceptors.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: Url,
    /// Correlates the hooks of one call in logs; never sent on the wire.
    pub request_id: String,
}

/// Interceptor trait for cross-cutting concerns (logging/metrics/audit/custom behavior).
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn on_request(&self, _ctx: &RequestContext, _req: &HttpRequest) {}

    async fn on_response(&self, _ctx: &RequestContext, _resp: &HttpResponse) {}

    async fn on_error(&self, _ctx: &RequestContext, _err: &Error) {}
}

/// A simple interceptor pipeline that runs hooks in order.
#[derive(Default)]
pub struct InterceptorPipeline {
    pub(crate) interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorPipeline {
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    pub fn with<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    pub fn push(&mut self, interceptor: Box<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Run hooks around a provided async function that performs the actual call.
    ///
    /// `on_response` sees every response that arrived, including non-success
    /// statuses; `on_error` sees only failures to complete the exchange.
    pub async fn execute<F, Fut>(
        &self,
        ctx: &RequestContext,
        req: &HttpRequest,
        f: F,
    ) -> Result<HttpResponse, Error>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<HttpResponse, Error>>,
    {
        for ic in &self.interceptors {
            ic.on_request(ctx, req).await;
        }

        match f().await {
            Ok(resp) => {
                for ic in &self.interceptors {
                    ic.on_response(ctx, &resp).await;
                }
                Ok(resp)
            }
            Err(err) => {
                for ic in &self.interceptors {
                    ic.on_error(ctx, &err).await;
                }
                Err(err)
            }
        }
    }
}

/// Logs full request and response bodies at `info` level.
///
/// Occurrences of the secret are replaced with `***` and headers are never
/// logged. Bodies longer than `max_body_len` bytes are truncated.
pub struct TracingInterceptor {
    secret: Option<String>,
    max_body_len: Option<usize>,
}

impl TracingInterceptor {
    pub fn new() -> Self {
        Self {
            secret: None,
            max_body_len: None,
        }
    }

    /// Redact this value wherever it shows up in a logged body.
    pub fn redact(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.secret = (!secret.is_empty()).then_some(secret);
        self
    }

    pub fn max_body_len(mut self, n: usize) -> Self {
        self.max_body_len = Some(n);
        self
    }

    fn render(&self, body: &[u8]) -> String {
        let mut text = String::from_utf8_lossy(body).into_owned();
        if let Some(secret) = &self.secret {
            text = text.replace(secret.as_str(), "***");
        }
        if let Some(max) = self.max_body_len {
            if text.len() > max {
                let mut cut = max;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                let dropped = text.len() - cut;
                text.truncate(cut);
                text.push_str(&format!("...[{dropped} bytes truncated]"));
            }
        }
        text
    }
}

impl Default for TracingInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Interceptor for TracingInterceptor {
    async fn on_request(&self, ctx: &RequestContext, req: &HttpRequest) {
        tracing::info!(
            request_id = %ctx.request_id,
            "Sending {} request to {} with body: {}",
            ctx.method,
            ctx.url,
            self.render(&req.body)
        );
    }

    async fn on_response(&self, ctx: &RequestContext, resp: &HttpResponse) {
        tracing::info!(
            request_id = %ctx.request_id,
            "Received response with status: {}",
            resp.status
        );
        tracing::info!(
            request_id = %ctx.request_id,
            "Response body: {}",
            self.render(&resp.body)
        );
    }

    async fn on_error(&self, ctx: &RequestContext, err: &Error) {
        tracing::warn!(
            request_id = %ctx.request_id,
            "{} {} failed: {}",
            ctx.method,
            ctx.url,
            err
        );
    }
}
