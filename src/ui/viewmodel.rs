//! View model types representing render-ready screen state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) on demand
//! (`home_viewmodel`, `todos_viewmodel`, `analytics_viewmodel`) and consumed by
//! whatever host draws the screens. They contain no business logic, only
//! display-ready data, and serialize to JSON for headless hosts.

use crate::analytics::{DailyActivity, StatisticsSnapshot};
use crate::domain::{Todo, TodoId};
use crate::views::{FilterCounts, FilterMode};
use serde::Serialize;

/// Number of recent items shown on the home screen.
pub const RECENT_LIMIT: usize = 3;

/// Daily count that fills an activity bar completely.
pub const BAR_FULL_SCALE: u32 = 8;

/// Landing screen summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeViewModel {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub completion_rate: u32,

    /// Newest items by creation time, at most [`RECENT_LIMIT`].
    pub recent: Vec<RecentItem>,

    /// Every item is completed and there is at least one.
    pub all_done: bool,

    /// Label of the button leading to the todo list.
    pub primary_action: &'static str,

    /// Whether the analytics entry point is offered.
    pub show_analytics: bool,
}

/// One line of the home screen's recent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl From<&Todo> for RecentItem {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text.clone(),
            completed: todo.completed,
        }
    }
}

/// Todo list screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodosViewModel {
    /// Active filter tab.
    pub filter: FilterMode,

    /// Badge counts for the three filter tabs.
    pub counts: FilterCounts,

    /// Rows admitted by `filter`, in collection order.
    pub rows: Vec<TodoRow>,

    /// Shown instead of rows when `rows` is empty.
    pub empty_message: Option<&'static str>,

    /// Whether the progress summary is shown.
    pub show_stats: bool,

    pub summary: ProgressSummary,

    /// Count for the "Clear Completed" button, absent when nothing is completed.
    pub clear_completed_count: Option<usize>,
}

/// Display information for a single todo row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,

    /// Row shows a text input instead of the text.
    pub editing: bool,

    /// Current input contents while editing.
    pub draft: Option<String>,

    /// How far the row is pulled left by an active swipe.
    pub swipe_offset: f64,

    /// Releasing the swipe now deletes the row.
    pub armed: bool,

    /// Edit button enabled. Completed items cannot be edited.
    pub can_edit: bool,

    /// Resting rows advertise the swipe gesture.
    pub show_swipe_hint: bool,
}

/// Remaining / completed counts with overall progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub remaining: usize,
    pub completed: usize,
    /// Percentage, `0..=100`.
    pub progress: u32,
}

/// Analytics screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsViewModel {
    pub stats: StatisticsSnapshot,
    pub bars: Vec<ActivityBar>,
    pub perfect_completion: bool,
    pub achievements: Vec<Achievement>,
}

/// One day of the weekly activity chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBar {
    pub label: String,
    pub completed: u32,
    pub created: u32,
    /// Fraction of the track to fill, `0.0..=1.0`.
    pub completed_width: f64,
    /// Fraction of the track to fill, `0.0..=1.0`.
    pub created_width: f64,
}

impl From<&DailyActivity> for ActivityBar {
    fn from(day: &DailyActivity) -> Self {
        Self {
            label: day.label(),
            completed: day.completed,
            created: day.created,
            completed_width: bar_width(day.completed),
            created_width: bar_width(day.created),
        }
    }
}

/// Milestone badge on the analytics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Maps a daily count onto the bar track, saturating at [`BAR_FULL_SCALE`].
#[must_use]
pub fn bar_width(count: u32) -> f64 {
    (f64::from(count) / f64::from(BAR_FULL_SCALE)).clamp(0.0, 1.0)
}

/// Achievement badges for `stats`.
#[must_use]
pub fn achievements(stats: &StatisticsSnapshot) -> Vec<Achievement> {
    vec![
        Achievement {
            title: "First Todo Completed",
            description: "Complete your first todo",
            unlocked: stats.completed >= 1,
        },
        Achievement {
            title: "Getting Started",
            description: "Complete 5 todos",
            unlocked: stats.completed >= 5,
        },
        Achievement {
            title: "Consistency Master",
            description: "3-day completion streak",
            unlocked: stats.streak >= 3,
        },
    ]
}
