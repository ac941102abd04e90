//! Completion provider integrations for scenesmith.
//!
//! Currently a single provider is implemented: the Anthropic Messages API.
//! The client implements [`scenesmith_interface::SceneDriver`], so the scene
//! pipeline never depends on provider specifics.
//!
//! # Example
//!
//! ```no_run
//! use scenesmith_models::AnthropicClient;
//! use scenesmith_interface::SceneDriver;
//! use scenesmith_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnthropicClient::from_env("claude-3-5-sonnet-20241022")?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::new(Role::User, "A red cube on a plane")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};
