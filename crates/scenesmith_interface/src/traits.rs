//! Trait definitions for completion backends and their capabilities.

use async_trait::async_trait;
use scenesmith_core::{GenerateRequest, GenerateResponse};
use scenesmith_error::ScenesmithResult;

/// Core trait that all completion backends must implement.
///
/// This is the minimal interface for synchronous text generation: one
/// request in, one response out, no streaming, no retries. The pipeline
/// issues at most one in-flight request per user interaction.
#[async_trait]
pub trait SceneDriver: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> ScenesmithResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}
