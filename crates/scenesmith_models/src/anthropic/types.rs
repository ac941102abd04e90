//! Anthropic Messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A content block in an Anthropic message or response.
///
/// Only text blocks are consumed; the scene pipeline is text-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnthropicContentBlock {
    /// Plain text content
    Text {
        /// The text payload
        text: String,
    },
}

impl AnthropicContentBlock {
    /// The text payload of this block.
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// A role-tagged message in an Anthropic conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(pattern = "owned", setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Message content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Anthropic Messages API request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(pattern = "owned", setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
    /// System instruction, sent as a top-level field
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Token usage statistics from Anthropic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    /// Input tokens consumed
    #[serde(default)]
    input_tokens: u32,
    /// Output tokens generated
    #[serde(default)]
    output_tokens: u32,
}

/// Anthropic Messages API response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Model that produced the response
    model: String,
    /// Generated content blocks
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped ("end_turn", "max_tokens", ...)
    #[serde(default)]
    stop_reason: Option<String>,
    /// Token usage statistics
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}
