//! In-memory session state.

use crate::SceneRecord;
use serde::{Deserialize, Serialize};

/// Append-only generation history plus a cursor to the most recent record.
///
/// This is explicit, passed-around state rather than an ambient global: the
/// pipeline takes `&mut Session` and appends one record per successful
/// generation. Records are never mutated or removed; the history lives and
/// dies with the process.
///
/// # Examples
///
/// ```
/// use scenesmith_core::{SceneRecord, Session};
///
/// let mut session = Session::default();
/// assert!(session.current().is_none());
///
/// let record = SceneRecord::builder()
///     .prompt("A red cube".to_string())
///     .html("<html></html>".to_string())
///     .build()
///     .unwrap();
/// let index = session.push(record);
/// assert_eq!(index, 0);
/// assert_eq!(session.current().unwrap().prompt(), "A red cube");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    records: Vec<SceneRecord>,
    current: Option<usize>,
}

impl Session {
    /// Appends a record, moves the cursor to it, and returns its index.
    pub fn push(&mut self, record: SceneRecord) -> usize {
        self.records.push(record);
        let index = self.records.len() - 1;
        self.current = Some(index);
        index
    }

    /// The most recently generated record, if any.
    pub fn current(&self) -> Option<&SceneRecord> {
        self.current.and_then(|i| self.records.get(i))
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SceneRecord] {
        &self.records
    }

    /// Number of records in the history.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt: &str) -> SceneRecord {
        SceneRecord::builder()
            .prompt(prompt.to_string())
            .html("<html></html>".to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn push_moves_cursor_to_latest() {
        let mut session = Session::default();
        session.push(record("first"));
        session.push(record("second"));

        assert_eq!(session.len(), 2);
        assert_eq!(session.current().unwrap().prompt(), "second");
    }

    #[test]
    fn history_preserves_insertion_order() {
        let mut session = Session::default();
        for prompt in ["a", "b", "c"] {
            session.push(record(prompt));
        }

        let prompts: Vec<&str> = session.records().iter().map(|r| r.prompt().as_str()).collect();
        assert_eq!(prompts, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_session_has_no_current() {
        let session = Session::default();
        assert!(session.is_empty());
        assert!(session.current().is_none());
    }
}
