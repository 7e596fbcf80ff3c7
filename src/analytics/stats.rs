//! Productivity statistics derived from the todo collection.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! read; nothing is cached. Rounding is done in integer arithmetic so that
//! half-way values round up exactly, without floating point drift (`5 * 4.3`
//! is not `21.5` in binary floating point).
//!
//! # Formulas
//!
//! ```text
//! completion_rate    = round(completed / total * 100)      (0 when total = 0)
//! streak             = min(7, completed)
//! productivity_score = round(rate * 0.7 + streak * 4.3)    clamped to [0, 100]
//! average_per_day    = round(completed / 7 * 10) / 10
//! ```
//!
//! The streak is a size-based proxy. It does not look at `created_at` or any
//! calendar day.

use super::activity::{ActivityLog, WeeklyActivity};
use crate::domain::Todo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound of the streak proxy.
pub const MAX_STREAK: u32 = 7;

/// Upper bound of the productivity score.
pub const MAX_SCORE: u32 = 100;

/// Statistics for the home and analytics screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Percentage of items completed, `0..=100`.
    pub completion_rate: u32,
    /// Completed items, capped at [`MAX_STREAK`].
    pub streak: u32,
    /// Weighted blend of completion rate and streak, `0..=100`.
    pub productivity_score: u32,
    /// Completed items spread over a week, one decimal place.
    pub average_per_day: f64,
    pub weekly_activity: WeeklyActivity,
}

/// Percentage of `total` that is `completed`, rounded half-up.
///
/// ```
/// use tickoff::analytics::completion_rate;
///
/// assert_eq!(completion_rate(0, 0), 0);
/// assert_eq!(completion_rate(3, 4), 75);
/// assert_eq!(completion_rate(1, 8), 13);
/// ```
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    let rate = (completed * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(MAX_SCORE)
}

#[must_use]
pub fn streak(completed: usize) -> u32 {
    u32::try_from(completed).map_or(MAX_STREAK, |n| n.min(MAX_STREAK))
}

/// `round(rate * 0.7 + streak * 4.3)` clamped to `[0, 100]`.
///
/// ```
/// use tickoff::analytics::productivity_score;
///
/// assert_eq!(productivity_score(50, 5), 57);
/// assert_eq!(productivity_score(100, 7), 100);
/// ```
#[must_use]
pub fn productivity_score(completion_rate: u32, streak: u32) -> u32 {
    let tenths = completion_rate
        .saturating_mul(7)
        .saturating_add(streak.saturating_mul(43));
    (tenths.saturating_add(5) / 10).min(MAX_SCORE)
}

/// `completed / 7`, rounded to one decimal place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_per_day(completed: usize) -> f64 {
    let tenths = (completed as u64).saturating_mul(20).saturating_add(7) / 14;
    tenths as f64 / 10.0
}

/// Computes a fresh snapshot.
///
/// Cost is linear in the number of todos plus one call to `activity`.
#[must_use]
pub fn compute(todos: &[Todo], activity: &dyn ActivityLog, today: NaiveDate) -> StatisticsSnapshot {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.completed).count();
    let completion_rate = completion_rate(completed, total);
    let streak = streak(completed);

    let snapshot = StatisticsSnapshot {
        total,
        completed,
        active: total - completed,
        completion_rate,
        streak,
        productivity_score: productivity_score(completion_rate, streak),
        average_per_day: average_per_day(completed),
        weekly_activity: activity.trailing_week(today),
    };

    tracing::trace!(
        total,
        completed,
        completion_rate,
        productivity_score = snapshot.productivity_score,
        "statistics computed"
    );

    snapshot
}
