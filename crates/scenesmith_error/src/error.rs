//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, HttpError, ModelError, PromptError};

/// The foundation error enum for the scenesmith workspace.
///
/// # Examples
///
/// ```
/// use scenesmith_error::{ScenesmithError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScenesmithError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenesmithErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Completion provider error
    #[from(ModelError)]
    Model(ModelError),
    /// Prompt validation error
    #[from(PromptError)]
    Prompt(PromptError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Scenesmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenesmith_error::{ScenesmithResult, ConfigError};
///
/// fn might_fail() -> ScenesmithResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenesmith Error: {}", _0)]
pub struct ScenesmithError(Box<ScenesmithErrorKind>);

impl ScenesmithError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenesmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenesmithErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScenesmithErrorKind
impl<T> From<T> for ScenesmithError
where
    T: Into<ScenesmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scenesmith operations.
pub type ScenesmithResult<T> = std::result::Result<T, ScenesmithError>;
