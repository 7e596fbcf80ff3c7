//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container. It owns the
//! [`TodoStore`] together with the transient UI state that hangs off it: the
//! active filter, per-item edit drafts and per-item swipe gestures. View models
//! are computed on demand from the current snapshot; nothing derived is cached.
//!
//! # State Components
//!
//! - **Store**: The todo collection and its clock
//! - **Filter**: Which slice of the collection the list screen shows
//! - **Drafts**: Input contents of rows in edit mode, keyed by id
//! - **Gestures**: Swipe state of rows with a touch in progress, keyed by id
//! - **Activity log**: Source of the weekly series, fed on add and complete
//!
//! Rows without a draft are in [`ItemMode::Viewing`]; rows without a gesture
//! entry are idle. Both maps only ever hold ids present in the store.

use super::actions::Action;
use super::modes::{FilterMode, ItemMode};
use crate::analytics::{self, ActivityLog, StatisticsSnapshot};
use crate::domain::{Todo, TodoId};
use crate::gesture::{GestureEffect, SwipeConfig, SwipeGesture, TouchEvent, DEFAULT_PULSE_MS};
use crate::store::TodoStore;
use crate::ui::viewmodel::{
    achievements, AnalyticsViewModel, HomeViewModel, ProgressSummary, RecentItem, TodoRow,
    TodosViewModel, RECENT_LIMIT,
};
use crate::views::FilterCounts;
use std::collections::HashMap;

/// Central application state container.
pub struct AppState {
    /// The todo collection.
    pub store: TodoStore,

    /// Current list filter.
    pub filter: FilterMode,

    drafts: HashMap<TodoId, String>,
    gestures: HashMap<TodoId, SwipeGesture>,
    activity: Box<dyn ActivityLog>,
    swipe: SwipeConfig,
    haptic_duration_ms: u32,
}

impl AppState {
    /// Creates a new application state around `store`.
    ///
    /// Starts on the `All` filter with no row editing or swiping, default
    /// swipe distances and the default haptic pulse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use tickoff::analytics::FixedActivityLog;
    /// use tickoff::app::AppState;
    /// use tickoff::store::{SystemClock, TodoStore};
    ///
    /// let store = TodoStore::new(Arc::new(SystemClock));
    /// let state = AppState::new(store, Box::new(FixedActivityLog));
    /// assert!(state.store.is_empty());
    /// ```
    #[must_use]
    pub fn new(store: TodoStore, activity: Box<dyn ActivityLog>) -> Self {
        Self {
            store,
            filter: FilterMode::default(),
            drafts: HashMap::new(),
            gestures: HashMap::new(),
            activity,
            swipe: SwipeConfig::default(),
            haptic_duration_ms: DEFAULT_PULSE_MS,
        }
    }

    #[must_use]
    pub fn with_swipe_config(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    #[must_use]
    pub fn with_haptic_duration(mut self, duration_ms: u32) -> Self {
        self.haptic_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub const fn swipe_config(&self) -> &SwipeConfig {
        &self.swipe
    }

    /// Current swipe state of `id`; idle when no touch is in progress.
    #[must_use]
    pub fn gesture(&self, id: TodoId) -> SwipeGesture {
        self.gestures.get(&id).copied().unwrap_or(SwipeGesture::IDLE)
    }

    #[must_use]
    pub fn item_mode(&self, id: TodoId) -> ItemMode {
        if self.drafts.contains_key(&id) {
            ItemMode::Editing
        } else {
            ItemMode::Viewing
        }
    }

    #[must_use]
    pub fn draft(&self, id: TodoId) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    /// Adds a todo and records its creation in the activity log.
    pub fn add_todo(&mut self, text: &str) -> Option<TodoId> {
        let id = self.store.add(text)?;
        if let Some(todo) = self.store.get(id) {
            self.activity.record_created(todo.created_at);
        }
        Some(id)
    }

    /// Toggles a todo, recording the completion when it becomes done.
    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        if !self.store.toggle(id) {
            return false;
        }
        if self.store.get(id).is_some_and(|todo| todo.completed) {
            let now = self.store.clock().now();
            self.activity.record_completed(id, now);
        }
        true
    }

    /// Deletes a todo along with its draft and gesture.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        if !self.store.delete(id) {
            return false;
        }
        self.forget(id);
        true
    }

    /// Removes completed todos and any row state they left behind.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.store.clear_completed();
        if removed > 0 {
            let store = &self.store;
            self.drafts.retain(|id, _| store.contains(*id));
            self.gestures.retain(|id, _| store.contains(*id));
        }
        removed
    }

    /// Puts `id` into edit mode with its current text as the draft.
    ///
    /// Unknown and completed items cannot be edited. Entering edit mode resets
    /// the row's gesture.
    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.store.get(id) else {
            return false;
        };
        if todo.completed || self.drafts.contains_key(&id) {
            return false;
        }
        let text = todo.text.clone();
        self.drafts.insert(id, text);
        self.gestures.remove(&id);
        true
    }

    /// Replaces the draft of a row in edit mode.
    pub fn update_draft(&mut self, id: TodoId, text: &str) -> bool {
        match self.drafts.get_mut(&id) {
            Some(draft) if draft.as_str() != text => {
                text.clone_into(draft);
                true
            }
            _ => false,
        }
    }

    /// Commits the draft of `id`.
    ///
    /// A blank draft is refused: the store is untouched and the row stays in
    /// edit mode. Returns whether the row left edit mode.
    pub fn save_edit(&mut self, id: TodoId) -> bool {
        let Some(draft) = self.drafts.get(&id) else {
            return false;
        };
        if draft.trim().is_empty() {
            tracing::debug!(todo_id = %id, "blank draft refused, staying in edit mode");
            return false;
        }
        if let Some(draft) = self.drafts.remove(&id) {
            self.store.edit(id, &draft);
        }
        true
    }

    /// Leaves edit mode, discarding the draft.
    pub fn cancel_edit(&mut self, id: TodoId) -> bool {
        self.drafts.remove(&id).is_some()
    }

    /// Feeds a touch event to the gesture of `id` and carries out its effect.
    ///
    /// # Returns
    ///
    /// A tuple of `(needs_render, actions)`. Committed swipes delete the item
    /// here; haptic and snap-back effects become [`Action`]s for the host.
    pub fn apply_touch(&mut self, id: TodoId, event: TouchEvent) -> (bool, Vec<Action>) {
        if !self.store.contains(id) {
            tracing::debug!(todo_id = %id, "touch on unknown item ignored");
            return (false, vec![]);
        }

        let editing = self.item_mode(id).is_editing();
        let current = self.gesture(id);
        let (next, effect) = current.apply(event, editing, &self.swipe);

        if next.is_idle() {
            self.gestures.remove(&id);
        } else {
            self.gestures.insert(id, next);
        }

        let mut actions = vec![];
        match effect {
            Some(GestureEffect::Haptic) => {
                tracing::debug!(todo_id = %id, "swipe armed");
                actions.push(Action::Haptic {
                    duration_ms: self.haptic_duration_ms,
                });
            }
            Some(GestureEffect::Commit) => {
                tracing::debug!(todo_id = %id, "swipe committed");
                self.delete_todo(id);
            }
            Some(GestureEffect::SnapBack) => {
                actions.push(Action::SnapBack { id });
            }
            None => {}
        }

        (next != current || effect.is_some(), actions)
    }

    /// Drops all row state for `id`.
    pub fn forget(&mut self, id: TodoId) -> bool {
        let had_draft = self.drafts.remove(&id).is_some();
        let had_gesture = self.gestures.remove(&id).is_some();
        had_draft || had_gesture
    }

    /// Returns every row to idle, dropping unterminated gestures.
    pub fn reset_gestures(&mut self) -> bool {
        let had_any = !self.gestures.is_empty();
        self.gestures.clear();
        had_any
    }

    /// Fresh statistics for the current collection.
    #[must_use]
    pub fn statistics(&self) -> StatisticsSnapshot {
        let today = self.store.clock().now().date_naive();
        analytics::compute(self.store.todos(), self.activity.as_ref(), today)
    }

    /// Computes the landing screen.
    #[must_use]
    pub fn home_viewmodel(&self) -> HomeViewModel {
        let stats = self.statistics();
        let mut recent: Vec<&Todo> = self.store.todos().iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        HomeViewModel {
            total: stats.total,
            completed: stats.completed,
            active: stats.active,
            completion_rate: stats.completion_rate,
            recent: recent
                .into_iter()
                .take(RECENT_LIMIT)
                .map(RecentItem::from)
                .collect(),
            all_done: stats.total > 0 && stats.completion_rate == 100,
            primary_action: if stats.total > 0 {
                "Manage Todos"
            } else {
                "Get Started"
            },
            show_analytics: stats.total > 0,
        }
    }

    /// Computes the todo list screen for the current filter.
    #[must_use]
    pub fn todos_viewmodel(&self) -> TodosViewModel {
        let _span = tracing::debug_span!("todos_viewmodel",
            total = self.store.len(),
            filter = %self.filter
        )
        .entered();

        let todos = self.store.todos();
        let counts = FilterCounts::of(todos);
        let rows: Vec<TodoRow> = todos
            .iter()
            .filter(|todo| self.filter.admits(todo))
            .map(|todo| self.compute_row(todo))
            .collect();

        TodosViewModel {
            filter: self.filter,
            counts,
            empty_message: rows.is_empty().then(|| self.filter.empty_message()),
            rows,
            show_stats: counts.all > 0,
            summary: ProgressSummary {
                remaining: counts.active,
                completed: counts.completed,
                progress: analytics::completion_rate(counts.completed, counts.all),
            },
            clear_completed_count: (counts.completed > 0).then_some(counts.completed),
        }
    }

    /// Computes the analytics screen.
    #[must_use]
    pub fn analytics_viewmodel(&self) -> AnalyticsViewModel {
        let stats = self.statistics();
        AnalyticsViewModel {
            bars: stats.weekly_activity.iter().map(Into::into).collect(),
            perfect_completion: stats.total > 0 && stats.completion_rate == 100,
            achievements: achievements(&stats),
            stats,
        }
    }

    fn compute_row(&self, todo: &Todo) -> TodoRow {
        let editing = self.item_mode(todo.id).is_editing();
        let gesture = self.gesture(todo.id);

        TodoRow {
            id: todo.id,
            text: todo.text.clone(),
            completed: todo.completed,
            editing,
            draft: self.drafts.get(&todo.id).cloned(),
            swipe_offset: gesture.offset(),
            armed: gesture.is_armed(),
            can_edit: !todo.completed,
            show_swipe_hint: !editing && gesture.offset() <= 0.0,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("filter", &self.filter)
            .field("drafts", &self.drafts)
            .field("gestures", &self.gestures)
            .field("swipe", &self.swipe)
            .field("haptic_duration_ms", &self.haptic_duration_ms)
            .finish_non_exhaustive()
    }
}
