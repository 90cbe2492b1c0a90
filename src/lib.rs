//! # claude-messages
//!
//! Typed client for the Anthropic Messages API.
//!
//! ## Overview
//!
//! A request is built as a [`MessageRequest`], serialized to JSON, sent as a
//! single authenticated `POST` to `https://api.anthropic.com/v1/messages`,
//! and the reply is decoded into a [`MessageResponse`]. Every call is one
//! attempt: there is no retry, streaming or caching.
//!
//! Two layers:
//!
//! - **Transport** ([`Client::execute`]): owns the credential, sets the fixed
//!   headers, returns the raw body of a `200 OK` or an [`Error`].
//! - **Messages** ([`Client::send`]): typed façade over `execute`.
//!
//! [`blocking::Client`] offers the same operations for synchronous callers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use claude_messages::{Client, Message, MessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> claude_messages::Result<()> {
//!     let client = Client::new(std::env::var("ANTHROPIC_API_KEY").unwrap_or_default())?;
//!
//!     let request = MessageRequest::new(
//!         "claude-1.3",
//!         vec![Message::user("Can you explain LLMs in plain English?")],
//!         100,
//!     )
//!     .temperature(0.7);
//!
//!     let response = client.send(&request).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! The library only emits `debug` metadata through `tracing`. Body logging is
//! opt-in through [`interceptors::TracingInterceptor`].
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Async client, builder and message service |
//! | [`blocking`] | Synchronous wrapper |
//! | [`config`] | Credential and transport settings |
//! | [`interceptors`] | Request/response hooks |
//! | [`transport`] | HTTP seam and reqwest implementation |
//! | [`types`] | Wire types |

pub mod blocking;
pub mod client;
pub mod config;
pub mod interceptors;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder, Messages};
pub use config::{ClientConfig, Credential};
pub use interceptors::{Interceptor, TracingInterceptor};
pub use types::{
    extract_text, ContentBlock, ImageSource, Message, MessageContent, MessageRequest,
    MessageResponse, Metadata, Role, StopReason, ToolChoice, ToolChoiceOptions, Usage,
};

pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiErrorBody, Error, ErrorContext};
