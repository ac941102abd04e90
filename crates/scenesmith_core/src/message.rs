//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a conversation.
///
/// The scene pipeline is text-only: prompts go out as text and HTML comes
/// back as text, so no multimodal content types are carried here.
///
/// # Examples
///
/// ```
/// use scenesmith_core::{Message, Role};
///
/// let message = Message::new(Role::User, "A quiet harbor at dusk");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
