//! Request and response types for text generation.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generic generation request.
///
/// # Examples
///
/// ```
/// use scenesmith_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .system("You are a scene generator.".to_string())
///     .messages(vec![Message::new(Role::User, "A red cube")])
///     .max_tokens(4096u32)
///     .temperature(0.7f32)
///     .model("claude-3-5-sonnet-20241022".to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(4096));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, Default)]
#[builder(pattern = "owned", setter(into, strip_option), default)]
pub struct GenerateRequest {
    /// System instruction, sent separately from the conversation
    system: Option<String>,
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Token usage reported by the completion service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Default,
)]
pub struct Usage {
    /// Tokens consumed by the request
    #[serde(default)]
    input_tokens: u32,
    /// Tokens generated in the response
    #[serde(default)]
    output_tokens: u32,
}

impl Usage {
    /// Creates a new usage record.
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use scenesmith_core::GenerateResponse;
///
/// let response = GenerateResponse::builder()
///     .outputs(vec!["<html></html>".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(response.text(), "<html></html>");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, Default)]
#[builder(pattern = "owned", setter(into, strip_option), default)]
pub struct GenerateResponse {
    /// The generated text blocks from the model
    outputs: Vec<String>,
    /// Model identifier reported by the service
    model: Option<String>,
    /// Reason generation stopped (e.g. "end_turn", "max_tokens")
    stop_reason: Option<String>,
    /// Token usage, when the service reports it
    usage: Option<Usage>,
}

impl GenerateResponse {
    /// Creates a new builder for `GenerateResponse`.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// All text blocks concatenated into a single response string.
    pub fn text(&self) -> String {
        self.outputs.join("")
    }
}
