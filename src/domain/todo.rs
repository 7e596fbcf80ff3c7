//! Todo domain model.
//!
//! A [`Todo`] is a single short text item with a completion flag. Items are
//! identified by an opaque [`TodoId`] and carry the instant they were created,
//! which never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Mints a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single trackable text item.
///
/// # Fields
///
/// - `id`: Unique within the collection for the item's lifetime
/// - `text`: Trimmed, never empty once stored
/// - `completed`: Completion flag, flipped by toggling
/// - `created_at`: Assigned once at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates an active todo.
    ///
    /// The caller is responsible for trimming `text`; the store does so before
    /// calling this.
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Returns a copy carrying `text` instead of the current text.
    #[must_use]
    pub fn with_text(&self, text: String) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }
}

/// The onboarding items a fresh tracker starts with.
///
/// Three items, the last one already completed so every filter has something
/// to show on first launch.
///
/// ```
/// use chrono::Utc;
/// use tickoff::domain::welcome_todos;
///
/// let todos = welcome_todos(Utc::now());
/// assert_eq!(todos.len(), 3);
/// assert!(todos[2].completed);
/// ```
#[must_use]
pub fn welcome_todos(now: DateTime<Utc>) -> Vec<Todo> {
    let mut done = Todo::new(TodoId::new(), "Mark this todo as complete".to_string(), now);
    done.completed = true;

    vec![
        Todo::new(TodoId::new(), "Welcome to tickoff!".to_string(), now),
        Todo::new(TodoId::new(), "Try adding a new todo".to_string(), now),
        done,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_only_completion() {
        let todo = Todo::new(TodoId::new(), "Write tests".to_string(), Utc::now());
        let flipped = todo.toggled();

        assert!(flipped.completed);
        assert_eq!(flipped.id, todo.id);
        assert_eq!(flipped.text, todo.text);
        assert_eq!(flipped.created_at, todo.created_at);
        assert!(!flipped.toggled().completed);
    }

    #[test]
    fn with_text_keeps_identity_and_creation_time() {
        let todo = Todo::new(TodoId::new(), "Draft".to_string(), Utc::now());
        let edited = todo.with_text("Final".to_string());

        assert_eq!(edited.text, "Final");
        assert_eq!(edited.id, todo.id);
        assert_eq!(edited.created_at, todo.created_at);
    }

    #[test]
    fn ids_are_unique() {
        let a = TodoId::new();
        let b = TodoId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_serializes_as_bare_uuid() {
        let id = TodoId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
