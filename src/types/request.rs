//! Request body for `POST /v1/messages`.

use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::error::{Error, ErrorContext};
use crate::Result;

/// Conversation request.
///
/// `model`, `messages` and `max_tokens` are always sent. Every other field is
/// omitted from the wire form while unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_beta: Option<String>,
}

impl MessageRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens,
            temperature: None,
            top_k: None,
            top_p: None,
            stop_sequences: None,
            stream: None,
            system: None,
            tool_choice: None,
            metadata: None,
            anthropic_beta: None,
        }
    }

    pub fn temperature(mut self, t: f64) -> Self {
        self.temperature = Some(t);
        self
    }

    pub fn top_k(mut self, k: u32) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }

    pub fn stop_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_sequences = Some(sequences.into_iter().map(Into::into).collect());
        self
    }

    pub fn stream(mut self, enable: bool) -> Self {
        self.stream = Some(enable);
        self
    }

    pub fn system(mut self, prompt: impl Into<String>) -> Self {
        self.system = Some(prompt.into());
        self
    }

    pub fn tool_choice(mut self, choice: ToolChoice) -> Self {
        self.tool_choice = Some(choice);
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn anthropic_beta(mut self, beta: impl Into<String>) -> Self {
        self.anthropic_beta = Some(beta.into());
        self
    }

    /// Reject requests the API would refuse before spending a round trip.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, msg: &str| {
            Err(Error::configuration_with_context(
                msg.to_string(),
                ErrorContext::new()
                    .with_field_path(format!("request.{field}"))
                    .with_source("request_validator"),
            ))
        };

        if self.model.trim().is_empty() {
            return invalid("model", "model identifier is required");
        }
        if self.messages.is_empty() {
            return invalid("messages", "at least one message is required");
        }
        if self.max_tokens == 0 {
            return invalid("max_tokens", "max_tokens must be greater than zero");
        }
        Ok(())
    }
}

/// How the model should use the provided tools.
///
/// Every variant carries [`ToolChoiceOptions`], so keys next to `type` survive
/// a decode/encode cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolChoice {
    Auto {
        #[serde(flatten)]
        options: ToolChoiceOptions,
    },
    Any {
        #[serde(flatten)]
        options: ToolChoiceOptions,
    },
    Tool {
        name: String,
        #[serde(flatten)]
        options: ToolChoiceOptions,
    },
    None {
        #[serde(flatten)]
        options: ToolChoiceOptions,
    },
}

impl ToolChoice {
    pub fn auto() -> Self {
        ToolChoice::Auto {
            options: ToolChoiceOptions::default(),
        }
    }

    pub fn any() -> Self {
        ToolChoice::Any {
            options: ToolChoiceOptions::default(),
        }
    }

    pub fn tool(name: impl Into<String>) -> Self {
        ToolChoice::Tool {
            name: name.into(),
            options: ToolChoiceOptions::default(),
        }
    }

    pub fn none() -> Self {
        ToolChoice::None {
            options: ToolChoiceOptions::default(),
        }
    }

    pub fn disable_parallel_tool_use(mut self, disable: bool) -> Self {
        self.options_mut().disable_parallel_tool_use = Some(disable);
        self
    }

    pub fn options(&self) -> &ToolChoiceOptions {
        match self {
            ToolChoice::Auto { options }
            | ToolChoice::Any { options }
            | ToolChoice::Tool { options, .. }
            | ToolChoice::None { options } => options,
        }
    }

    pub fn options_mut(&mut self) -> &mut ToolChoiceOptions {
        match self {
            ToolChoice::Auto { options }
            | ToolChoice::Any { options }
            | ToolChoice::Tool { options, .. }
            | ToolChoice::None { options } => options,
        }
    }
}

/// Settings shared by every tool choice. Unrecognised keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolChoiceOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_parallel_tool_use: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Request metadata. Keys beyond `user_id` pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Metadata {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
            extra: serde_json::Map::new(),
        }
    }
}
