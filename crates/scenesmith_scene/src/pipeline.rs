//! The end-to-end generation pipeline.

use crate::{SceneRequestBuilder, enhance, extract, repair};
use scenesmith_core::{DocumentKind, SceneRecord, Session};
use scenesmith_error::{BuilderError, PromptError, ScenesmithResult};
use scenesmith_interface::SceneDriver;
use tracing::{debug, info, warn};

/// Runs prompts through enhance, request building, generation, extraction,
/// and repair, appending one [`SceneRecord`] per successful run to the
/// session history.
///
/// One user interaction maps to one synchronous pipeline run: at most one
/// generation request (plus the optional enhancement call) is in flight at
/// a time, with no retries and no cancellation.
pub struct SceneGenerator<D> {
    driver: D,
    request_builder: SceneRequestBuilder,
    enhance_prompts: bool,
}

impl<D: SceneDriver> SceneGenerator<D> {
    /// Creates a pipeline around a completion driver, with enhancement off.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            request_builder: SceneRequestBuilder::default(),
            enhance_prompts: false,
        }
    }

    /// Enables or disables the enhancement pre-pass.
    pub fn with_enhancement(mut self, enabled: bool) -> Self {
        self.enhance_prompts = enabled;
        self
    }

    /// Replaces the request builder (model, token, temperature overrides).
    pub fn with_request_builder(mut self, builder: SceneRequestBuilder) -> Self {
        self.request_builder = builder;
        self
    }

    /// Generates a scene for `prompt` and appends it to `session`.
    ///
    /// # Errors
    ///
    /// - empty or whitespace-only prompt
    /// - transport or API failure of the generation call (terminal for this
    ///   request: no fallback HTML is synthesized for a failed call)
    ///
    /// Extraction failure is not an error: the repairer substitutes the
    /// fallback scene, so a successful call always yields a record.
    pub async fn generate(
        &self,
        prompt: &str,
        session: &mut Session,
    ) -> ScenesmithResult<SceneRecord> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PromptError::new("prompt must not be empty").into());
        }

        let enhancement = if self.enhance_prompts {
            Some(enhance(&self.driver, prompt).await)
        } else {
            None
        };
        let effective_prompt = enhancement
            .as_ref()
            .map(|e| e.text.as_str())
            .unwrap_or(prompt);

        let request = self.request_builder.build(effective_prompt)?;
        debug!(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
            "Requesting scene generation"
        );
        let response = self.driver.generate(&request).await?;

        let raw = response.text();
        let doc = extract(&raw);

        let hit_token_limit = response.stop_reason().as_deref() == Some("max_tokens");
        let missing_close = doc.kind == DocumentKind::Html
            && !doc.is_empty()
            && !doc
                .body
                .trim_end()
                .to_ascii_lowercase()
                .ends_with("</html>");
        let truncated = hit_token_limit || missing_close;
        if truncated {
            // Accepted limitation: no re-request for truncated output, the
            // partial document is repaired and returned as-is.
            warn!(
                hit_token_limit,
                missing_close, "Response looks truncated, returning best effort"
            );
        }

        let html = repair(&doc);

        let mut builder = SceneRecord::builder()
            .prompt(prompt.to_string())
            .html(html)
            .raw_response(raw)
            .truncated(truncated);
        if let Some(enhancement) = &enhancement {
            if !enhancement.degraded {
                builder = builder.enhanced_prompt(enhancement.text.clone());
            }
        }
        let record = builder
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let index = session.push(record.clone());
        info!(index, truncated, "Scene generated");
        Ok(record)
    }

    /// The underlying completion driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
