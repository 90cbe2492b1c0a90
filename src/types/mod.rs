//! # Types Module
//!
//! Strongly-typed representations of the Messages API wire format.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Conversation turns with text or multi-block content |
//! | [`request`] | Request body, tool choice and metadata |
//! | [`response`] | Response body, usage and text extraction |
//!
//! ## Example
//!
//! ```rust
//! use claude_messages::types::{Message, MessageRequest};
//!
//! let request = MessageRequest::new(
//!     "claude-1.3",
//!     vec![Message::user("Hello there.")],
//!     100,
//! )
//! .temperature(0.7);
//!
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["max_tokens"], 100);
//! assert!(body.get("top_k").is_none());
//! ```

pub mod message;
pub mod request;
pub mod response;

pub use message::{ContentBlock, ImageSource, Message, MessageContent, Role};
pub use request::{MessageRequest, Metadata, ToolChoice, ToolChoiceOptions};
pub use response::{extract_text, MessageResponse, StopReason, Usage};
