//! Prompt validation error types.

/// Prompt validation error with source location.
///
/// The only validation the pipeline performs is rejecting empty or
/// whitespace-only prompts before any network call is made.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Prompt Error: {} at line {} in {}", message, line, file)]
pub struct PromptError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
