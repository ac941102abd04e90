//! Generated scene records.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One successful generation, as stored in the session history.
///
/// Records are created once per generation and never mutated afterward.
///
/// # Examples
///
/// ```
/// use scenesmith_core::SceneRecord;
///
/// let record = SceneRecord::builder()
///     .prompt("A red cube".to_string())
///     .html("<!DOCTYPE html><html></html>".to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(record.prompt(), "A red cube");
/// assert!(record.enhanced_prompt().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(pattern = "owned", setter(into, strip_option))]
pub struct SceneRecord {
    /// The prompt as the user typed it
    prompt: String,
    /// The enhanced prompt, when enhancement ran and succeeded
    #[builder(default)]
    enhanced_prompt: Option<String>,
    /// The final, repaired HTML document
    html: String,
    /// The raw completion response text, kept for debugging
    #[builder(default)]
    raw_response: Option<String>,
    /// Whether the response looked truncated (did not end with `</html>`)
    #[builder(default)]
    truncated: bool,
    /// When the record was created
    #[builder(default = "Utc::now()")]
    timestamp: DateTime<Utc>,
}

impl SceneRecord {
    /// Creates a new builder for `SceneRecord`.
    pub fn builder() -> SceneRecordBuilder {
        SceneRecordBuilder::default()
    }
}
