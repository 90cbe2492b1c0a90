//! Client configuration: the API credential and transport knobs.
//!
//! Both are explicit values handed to the client builder. The `from_env`
//! constructors are conveniences for binaries; library code never reads the
//! environment implicitly.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{Error, ErrorContext};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1/";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";
pub const API_VERSION_ENV: &str = "ANTHROPIC_API_VERSION";
pub const TIMEOUT_ENV: &str = "ANTHROPIC_TIMEOUT_SECS";

/// Secret used to authenticate against the API.
///
/// Immutable once constructed. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "API key is empty",
                ErrorContext::new().with_source("credential"),
            ));
        }
        Ok(Self(secret))
    }

    /// Read the credential from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let secret = env::var(API_KEY_ENV).unwrap_or_default();
        if secret.trim().is_empty() {
            return Err(Error::configuration_with_context(
                format!("API key not found. Please set the {API_KEY_ENV} environment variable"),
                ErrorContext::new()
                    .with_field_path(API_KEY_ENV)
                    .with_source("credential"),
            ));
        }
        Ok(Self(secret))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Transport settings. Defaults target the public API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub api_version: String,
    /// Upper bound on a whole exchange (connect, send, read body).
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("claude-messages/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

impl ClientConfig {
    /// Defaults with `ANTHROPIC_BASE_URL`, `ANTHROPIC_API_VERSION` and
    /// `ANTHROPIC_TIMEOUT_SECS` applied when set.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(raw) = env::var(BASE_URL_ENV) {
            cfg = cfg.with_base_url(&raw)?;
        }

        if let Ok(version) = env::var(API_VERSION_ENV) {
            let version = version.trim();
            if !version.is_empty() {
                cfg.api_version = version.to_string();
            }
        }

        if let Ok(raw) = env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    value = %raw,
                    "ignoring invalid {TIMEOUT_ENV}, using {}s",
                    cfg.timeout.as_secs()
                ),
            }
        }

        Ok(cfg)
    }

    /// Replace the base URL. Relative paths are joined onto it, so a trailing
    /// `/` is added when missing.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&normalized).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL: {e}"),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(raw.to_string())
                .with_source("client_config"),
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported base URL scheme: {}", url.scheme()),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details("expected http or https")
                .with_source("client_config"),
        ));
    }

    Ok(url)
}
