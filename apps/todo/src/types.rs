//! Domain types shared by the local and the synchronized store.
//!
//! These are also the JSON shapes exchanged with the API:
//! `{"id": 1, "text": "buy milk", "done": false}`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Assigned by whichever side creates the item: the local store's counter, or
/// the server on creation. Serialized as a bare JSON integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable once assigned
    pub id: TodoId,
    /// What needs doing; never blank
    pub text: String,
    /// Whether the item is completed
    pub done: bool,
}

impl Todo {
    /// Creates a new, not yet completed item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Body of a creation request: `{"text": .., "done": false}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Trimmed, non-blank text
    pub text: String,
    /// Always false for new items
    pub done: bool,
}

impl NewTodo {
    /// Creation payload for a not yet completed item
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Body of an update request; only the completion flag is ever sent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// New completion flag
    pub done: bool,
}

/// Trims user input, returning `None` when nothing is left.
pub(crate) fn normalize_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
        assert_eq!(TodoId::from(7).get(), 7);
    }

    #[test]
    fn todo_new_is_not_done() {
        let item = Todo::new(TodoId::new(1), "buy milk");

        assert_eq!(item.id, TodoId::new(1));
        assert_eq!(item.text, "buy milk");
        assert!(!item.done);
    }

    #[test]
    fn todo_toggle_flips_done() {
        let mut item = Todo::new(TodoId::new(1), "buy milk");
        item.toggle();
        assert!(item.done);
        item.toggle();
        assert!(!item.done);
    }

    #[test]
    fn todo_matches_api_json() {
        let item: Todo =
            serde_json::from_str(r#"{"id": 3, "text": "walk dog", "done": true}"#).unwrap();
        assert_eq!(item.id, TodoId::new(3));
        assert!(item.done);

        let body = serde_json::to_value(NewTodo::new("walk dog")).unwrap();
        assert_eq!(body, serde_json::json!({"text": "walk dog", "done": false}));

        let patch = serde_json::to_value(TodoPatch { done: true }).unwrap();
        assert_eq!(patch, serde_json::json!({"done": true}));
    }

    #[test]
    fn normalize_text_rejects_blank() {
        assert_eq!(normalize_text("  buy milk \n"), Some("buy milk"));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t "), None);
    }
}
