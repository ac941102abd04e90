//! Optional prompt enhancement.
//!
//! One extra completion call that rewrites a short prompt into a richer
//! one. Failure here is never fatal: any transport error, API error, or
//! empty response degrades to the original prompt with a flag set, and the
//! pipeline proceeds.

use scenesmith_core::{GenerateRequest, Message, Role};
use scenesmith_interface::SceneDriver;
use tracing::{debug, warn};

/// Fixed instruction for the enhancement call.
pub const ENHANCE_INSTRUCTION: &str = "\
Expand the user's short scene description into a richer, more detailed one \
of 150 to 250 words. Describe objects, their shapes, colors, materials, \
placement, lighting, and atmosphere. Do not mention implementation details, \
libraries, or code. Respond with the expanded description only.";

const ENHANCE_MAX_TOKENS: u32 = 1024;

/// Result of an enhancement attempt.
///
/// When `degraded` is true, `text` is the original prompt, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    /// The prompt to use for generation
    pub text: String,
    /// Whether enhancement failed and the original prompt was kept
    pub degraded: bool,
}

/// Enhance a prompt through the completion service.
///
/// Single attempt, no retry. Never fails: callers always get a usable
/// prompt back.
pub async fn enhance<D: SceneDriver + ?Sized>(driver: &D, prompt: &str) -> Enhancement {
    let degraded = || Enhancement {
        text: prompt.to_string(),
        degraded: true,
    };

    let request = match GenerateRequest::builder()
        .system(ENHANCE_INSTRUCTION.to_string())
        .messages(vec![Message::new(Role::User, prompt)])
        .max_tokens(ENHANCE_MAX_TOKENS)
        .build()
    {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Failed to build enhancement request, keeping original prompt");
            return degraded();
        }
    };

    match driver.generate(&request).await {
        Ok(response) => {
            let text = response.text().trim().to_string();
            if text.is_empty() {
                warn!("Enhancement returned no content, keeping original prompt");
                degraded()
            } else {
                debug!(length = text.len(), "Prompt enhanced");
                Enhancement {
                    text,
                    degraded: false,
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "Enhancement call failed, keeping original prompt");
            degraded()
        }
    }
}
