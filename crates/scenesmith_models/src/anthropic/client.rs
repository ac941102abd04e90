use crate::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use reqwest::Client;
use scenesmith_core::{GenerateRequest, GenerateResponse, Role, Usage};
use scenesmith_error::{ConfigError, ModelError, ModelErrorKind, ModelResult};
use scenesmith_interface::SceneDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Maximum tokens requested when the caller does not specify one.
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Single-attempt request timeout. One call, one timeout, no retries.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Anthropic Messages API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-sonnet-20241022")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a client with the API key from `ANTHROPIC_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the variable is not set. Callers should
    /// treat this as fatal at startup rather than proceeding without a key.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|e| ConfigError::new(format!("ANTHROPIC_API_KEY not set: {}", e)))?;
        Ok(Self::new(api_key, model))
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> ModelResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelError::new(ModelErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelError::new(ModelErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelError::new(ModelErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a scenesmith GenerateRequest to an Anthropic API request.
    fn convert_request(&self, request: &GenerateRequest) -> ModelResult<AnthropicRequest> {
        let messages: Result<Vec<AnthropicMessage>, ModelError> = request
            .messages()
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::System => {
                        return Err(ModelError::new(ModelErrorKind::Conversion(
                            "System role not supported in messages (use system field)".to_string(),
                        )));
                    }
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(vec![AnthropicContentBlock::Text {
                        text: msg.content.clone(),
                    }])
                    .build()
                    .map_err(|e| ModelError::new(ModelErrorKind::Builder(e.to_string())))
            })
            .collect();

        let model = request
            .model()
            .clone()
            .unwrap_or_else(|| self.model.clone());
        let max_tokens = (*request.max_tokens()).unwrap_or(DEFAULT_MAX_TOKENS);

        let mut builder = AnthropicRequest::builder()
            .model(model)
            .max_tokens(max_tokens)
            .messages(messages?);

        if let Some(system) = request.system() {
            builder = builder.system(Some(system.clone()));
        }
        if let Some(temp) = request.temperature() {
            builder = builder.temperature(Some(*temp));
        }

        builder
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::Builder(e.to_string())))
    }

    /// Converts an Anthropic API response to a scenesmith GenerateResponse.
    fn convert_response(response: &AnthropicResponse) -> ModelResult<GenerateResponse> {
        let outputs: Vec<String> = response
            .content()
            .iter()
            .map(|block| block.text().to_string())
            .collect();

        let mut builder = GenerateResponse::builder()
            .outputs(outputs)
            .model(response.model().clone());

        if let Some(reason) = response.stop_reason() {
            builder = builder.stop_reason(reason.clone());
        }
        if let Some(usage) = response.usage() {
            builder = builder.usage(Usage::new(*usage.input_tokens(), *usage.output_tokens()));
        }

        builder
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::Builder(e.to_string())))
    }
}

#[async_trait::async_trait]
impl SceneDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, scenesmith_error::ScenesmithError> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        let response = Self::convert_response(&anthropic_response)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenesmith_core::Message;

    #[test]
    fn convert_request_maps_roles_and_defaults() {
        let client = AnthropicClient::new("test-key", "claude-3-5-sonnet-20241022");
        let request = GenerateRequest::builder()
            .system("Generate a scene.".to_string())
            .messages(vec![Message::new(Role::User, "A red cube")])
            .temperature(0.7f32)
            .build()
            .unwrap();

        let converted = client.convert_request(&request).unwrap();
        assert_eq!(converted.model(), "claude-3-5-sonnet-20241022");
        assert_eq!(*converted.max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(converted.messages()[0].role(), "user");
        assert_eq!(converted.system().as_deref(), Some("Generate a scene."));
    }

    #[test]
    fn convert_request_rejects_system_role_messages() {
        let client = AnthropicClient::new("test-key", "claude-3-5-sonnet-20241022");
        let request = GenerateRequest::builder()
            .messages(vec![Message::new(Role::System, "not allowed here")])
            .build()
            .unwrap();

        assert!(client.convert_request(&request).is_err());
    }

    #[test]
    fn convert_response_collects_text_blocks() {
        let body = r#"{
            "id": "msg_01",
            "model": "claude-3-5-sonnet-20241022",
            "content": [
                {"type": "text", "text": "<html>"},
                {"type": "text", "text": "</html>"}
            ],
            "stop_reason": "max_tokens",
            "usage": {"input_tokens": 5, "output_tokens": 10}
        }"#;
        let response: AnthropicResponse = serde_json::from_str(body).unwrap();

        let converted = AnthropicClient::convert_response(&response).unwrap();
        assert_eq!(converted.text(), "<html></html>");
        assert_eq!(converted.stop_reason().as_deref(), Some("max_tokens"));
    }
}
