//! Completion provider errors.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// Request could not be sent (connection, TLS, timeout)
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// The API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// The response body could not be parsed
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Error converting between provider and scenesmith types
    #[display("Conversion error: {}", _0)]
    Conversion(String),

    /// Builder error when constructing requests or responses
    #[display("Builder error: {}", _0)]
    Builder(String),

    /// The provider returned no usable text content
    #[display("Empty response from provider")]
    EmptyResponse,
}

/// Completion provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at {}:{}", kind, file, line)]
pub struct ModelError {
    /// The specific error kind
    pub kind: ModelErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new model error.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for provider operations.
pub type ModelResult<T> = Result<T, ModelError>;
