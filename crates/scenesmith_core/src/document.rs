//! Extracted scene document types.

use serde::{Deserialize, Serialize};

/// What kind of code the extractor believes it pulled out of the response.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A complete (or near-complete) HTML document
    #[display("html")]
    Html,
    /// A bare JavaScript fragment that needs an HTML shell
    #[display("js")]
    Js,
    /// A code block of unknown flavor
    #[display("generic")]
    Generic,
}

/// A document extracted from a completion response.
///
/// Extraction is best-effort: total failure is represented by the empty
/// sentinel (`body` empty), never by an error. The repairer turns the
/// sentinel into the canned fallback scene.
///
/// # Examples
///
/// ```
/// use scenesmith_core::{DocumentKind, SceneDocument};
///
/// let doc = SceneDocument::new("<html></html>", DocumentKind::Html);
/// assert!(!doc.is_empty());
///
/// let sentinel = SceneDocument::empty();
/// assert!(sentinel.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneDocument {
    /// The extracted text
    pub body: String,
    /// Guessed flavor of the extracted text
    pub kind: DocumentKind,
}

impl SceneDocument {
    /// Creates a document with the given body and kind.
    pub fn new(body: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            body: body.into(),
            kind,
        }
    }

    /// The empty sentinel marking extraction failure.
    pub fn empty() -> Self {
        Self {
            body: String::new(),
            kind: DocumentKind::Generic,
        }
    }

    /// Whether this document is the extraction-failure sentinel.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
