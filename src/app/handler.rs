//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns presentation events
//! into store mutations, row state changes and host actions. It is the single
//! control-flow entry point for everything a user does.
//!
//! # Architecture
//!
//! 1. Events arrive from the host (button presses, text input, touch input)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Collection**: `AddTodo`, `ToggleTodo`, `DeleteTodo`, `ClearCompleted`
//! - **View**: `SetFilter`
//! - **Editing**: `BeginEdit`, `UpdateDraft`, `SaveEdit`, `CancelEdit`
//! - **Touch**: `TouchStart`, `TouchMove`, `TouchEnd`, `TouchCancel`
//! - **Lifecycle**: `ItemUnmounted`, `Blur`
//!
//! Events that reference an unknown id are ignored.
//!
//! # Example
//!
//! ```rust
//! use tickoff::app::{handle_event, Event};
//! use tickoff::Config;
//!
//! let mut state = tickoff::initialize(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::AddTodo { text: "Buy milk".into() });
//! assert!(render);
//! assert!(actions.is_empty());
//! ```

use crate::app::{Action, AppState};
use crate::domain::TodoId;
use crate::gesture::TouchEvent;
use crate::views::FilterMode;
use serde::{Deserialize, Serialize};

/// Events triggered by user input or host lifecycle changes.
///
/// Serialized with a `type` tag, e.g. `{"type":"add_todo","text":"Buy milk"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Adds a todo. Blank text is ignored.
    AddTodo { text: String },
    /// Flips a todo between active and completed.
    ToggleTodo { id: TodoId },
    /// Deletes a todo via its delete button.
    DeleteTodo { id: TodoId },
    /// Removes every completed todo.
    ClearCompleted,
    /// Switches the list filter.
    SetFilter { filter: FilterMode },

    /// Opens the edit input of an active todo.
    BeginEdit { id: TodoId },
    /// Replaces the draft of a todo in edit mode.
    UpdateDraft { id: TodoId, text: String },
    /// Commits the draft. A blank draft keeps the input open.
    SaveEdit { id: TodoId },
    /// Closes the edit input, discarding the draft.
    CancelEdit { id: TodoId },

    /// Finger down on a row at horizontal position `x`.
    TouchStart { id: TodoId, x: f64 },
    /// Finger moved while down on a row.
    TouchMove { id: TodoId, x: f64 },
    /// Finger lifted.
    TouchEnd { id: TodoId },
    /// The host interrupted the touch.
    TouchCancel { id: TodoId },

    /// A row left the screen. Drops its draft and gesture.
    ItemUnmounted { id: TodoId },
    /// The window lost focus. Every gesture returns to idle.
    Blur,
}

impl Event {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "add_todo",
            Self::ToggleTodo { .. } => "toggle_todo",
            Self::DeleteTodo { .. } => "delete_todo",
            Self::ClearCompleted => "clear_completed",
            Self::SetFilter { .. } => "set_filter",
            Self::BeginEdit { .. } => "begin_edit",
            Self::UpdateDraft { .. } => "update_draft",
            Self::SaveEdit { .. } => "save_edit",
            Self::CancelEdit { .. } => "cancel_edit",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd { .. } => "touch_end",
            Self::TouchCancel { .. } => "touch_cancel",
            Self::ItemUnmounted { .. } => "item_unmounted",
            Self::Blur => "blur",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of `(needs_render, actions)`. `needs_render` is `false` when the
/// event changed nothing visible. Actions are to be executed in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::AddTodo { text } => match state.add_todo(text) {
            Some(id) => {
                tracing::debug!(todo_id = %id, total = state.store.len(), "todo added");
                (true, vec![])
            }
            None => {
                tracing::debug!("blank todo ignored");
                (false, vec![])
            }
        },
        Event::ToggleTodo { id } => (state.toggle_todo(*id), vec![]),
        Event::DeleteTodo { id } => (state.delete_todo(*id), vec![]),
        Event::ClearCompleted => {
            let removed = state.clear_completed();
            tracing::debug!(removed, "completed todos cleared");
            (removed > 0, vec![])
        }
        Event::SetFilter { filter } => {
            if state.filter == *filter {
                return (false, vec![]);
            }
            tracing::debug!(from = %state.filter, to = %filter, "filter changed");
            state.filter = *filter;
            (true, vec![])
        }
        Event::BeginEdit { id } => (state.begin_edit(*id), vec![]),
        Event::UpdateDraft { id, text } => (state.update_draft(*id, text), vec![]),
        Event::SaveEdit { id } => (state.save_edit(*id), vec![]),
        Event::CancelEdit { id } => (state.cancel_edit(*id), vec![]),
        Event::TouchStart { id, x } => state.apply_touch(*id, TouchEvent::Start { x: *x }),
        Event::TouchMove { id, x } => state.apply_touch(*id, TouchEvent::Move { x: *x }),
        Event::TouchEnd { id } => state.apply_touch(*id, TouchEvent::End),
        Event::TouchCancel { id } => state.apply_touch(*id, TouchEvent::Cancel),
        Event::ItemUnmounted { id } => (state.forget(*id), vec![]),
        Event::Blur => {
            let reset = state.reset_gestures();
            if reset {
                tracing::debug!("gestures reset on blur");
            }
            (reset, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::FixedActivityLog;
    use crate::store::{SystemClock, TodoStore};
    use std::sync::Arc;

    fn state_with(texts: &[&str]) -> (AppState, Vec<TodoId>) {
        let mut state =
            AppState::new(TodoStore::new(Arc::new(SystemClock)), Box::new(FixedActivityLog));
        let ids = texts.iter().filter_map(|text| state.add_todo(text)).collect();
        (state, ids)
    }

    #[test]
    fn events_decode_from_tagged_json() {
        let event: Event =
            serde_json::from_str(r#"{"type":"set_filter","filter":"completed"}"#).unwrap();
        assert_eq!(event, Event::SetFilter { filter: FilterMode::Completed });

        let event: Event = serde_json::from_str(r#"{"type":"blur"}"#).unwrap();
        assert_eq!(event, Event::Blur);
    }

    #[test]
    fn blank_add_needs_no_render() {
        let (mut state, _) = state_with(&[]);
        let (render, actions) = handle_event(&mut state, &Event::AddTodo { text: "   ".into() });
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.store.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let (mut state, _) = state_with(&["Keep"]);
        let before = state.store.snapshot();
        let ghost = TodoId::new();

        for event in [
            Event::ToggleTodo { id: ghost },
            Event::DeleteTodo { id: ghost },
            Event::BeginEdit { id: ghost },
            Event::TouchStart { id: ghost, x: 10.0 },
        ] {
            assert_eq!(handle_event(&mut state, &event), (false, vec![]));
        }
        assert!(Arc::ptr_eq(&before, &state.store.snapshot()));
    }

    #[test]
    fn swipe_emits_one_haptic_then_deletes() {
        let (mut state, ids) = state_with(&["Swipe me"]);
        let id = ids[0];

        handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
        let (_, actions) = handle_event(&mut state, &Event::TouchMove { id, x: 30.0 });
        assert_eq!(actions, vec![Action::Haptic { duration_ms: 50 }]);
        let (_, actions) = handle_event(&mut state, &Event::TouchMove { id, x: 10.0 });
        assert!(actions.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::TouchEnd { id });
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.store.is_empty());
    }

    #[test]
    fn short_swipe_snaps_back() {
        let (mut state, ids) = state_with(&["Stay"]);
        let id = ids[0];

        handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
        handle_event(&mut state, &Event::TouchMove { id, x: 70.0 });
        let (_, actions) = handle_event(&mut state, &Event::TouchEnd { id });

        assert_eq!(actions, vec![Action::SnapBack { id }]);
        assert_eq!(state.store.len(), 1);
        assert!(state.gesture(id).offset().abs() < f64::EPSILON);
    }

    #[test]
    fn editing_row_ignores_touch() {
        let (mut state, ids) = state_with(&["Edit me"]);
        let id = ids[0];

        handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
        handle_event(&mut state, &Event::TouchMove { id, x: 50.0 });
        assert!(handle_event(&mut state, &Event::BeginEdit { id }).0);
        assert!(state.gesture(id).is_idle());

        handle_event(&mut state, &Event::TouchStart { id, x: 100.0 });
        handle_event(&mut state, &Event::TouchMove { id, x: 0.0 });
        let (_, actions) = handle_event(&mut state, &Event::TouchEnd { id });
        assert!(actions.is_empty());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn blur_and_unmount_drop_unterminated_gestures() {
        let (mut state, ids) = state_with(&["a", "b"]);
        handle_event(&mut state, &Event::TouchStart { id: ids[0], x: 100.0 });
        handle_event(&mut state, &Event::TouchStart { id: ids[1], x: 100.0 });

        assert!(handle_event(&mut state, &Event::ItemUnmounted { id: ids[0] }).0);
        assert!(state.gesture(ids[0]).is_idle());

        assert!(handle_event(&mut state, &Event::Blur).0);
        assert!(state.gesture(ids[1]).is_idle());
        assert!(!handle_event(&mut state, &Event::Blur).0);
    }

    #[test]
    fn deleting_drops_the_draft() {
        let (mut state, ids) = state_with(&["Draft"]);
        let id = ids[0];
        handle_event(&mut state, &Event::BeginEdit { id });
        handle_event(&mut state, &Event::DeleteTodo { id });
        assert_eq!(state.draft(id), None);
    }

    #[test]
    fn filter_change_renders_once() {
        let (mut state, _) = state_with(&["x"]);
        assert!(handle_event(&mut state, &Event::SetFilter { filter: FilterMode::Active }).0);
        assert!(!handle_event(&mut state, &Event::SetFilter { filter: FilterMode::Active }).0);
    }
}
