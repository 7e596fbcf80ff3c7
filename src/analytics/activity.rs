//! Weekly activity series consumed by the statistics engine.
//!
//! The series is always exactly seven ordered days, enforced by the
//! [`WeeklyActivity`] array type. Where the numbers come from is the caller's
//! choice, injected as an [`ActivityLog`]:
//!
//! - [`FixedActivityLog`]: a constant demo series, independent of the date
//! - [`RecordingActivityLog`]: creation and completion instants bucketed by
//!   UTC calendar day over the trailing week

use crate::domain::TodoId;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Length of the trailing window, in days.
pub const WINDOW_DAYS: u64 = 7;

/// Activity counts for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Day of the week this entry covers.
    pub day: Weekday,
    /// Items completed that day.
    pub completed: u32,
    /// Items created that day.
    pub created: u32,
}

impl DailyActivity {
    #[must_use]
    pub const fn new(day: Weekday, completed: u32, created: u32) -> Self {
        Self { day, completed, created }
    }

    /// Short day label, e.g. `"Mon"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.day.to_string()
    }
}

/// Seven ordered days of activity, oldest first.
pub type WeeklyActivity = [DailyActivity; 7];

/// Source of the trailing-week activity series.
///
/// Recording hooks default to no-ops so read-only sources only implement
/// [`ActivityLog::trailing_week`].
pub trait ActivityLog: Send {
    /// Returns the seven days ending on `today`.
    fn trailing_week(&self, today: NaiveDate) -> WeeklyActivity;

    /// Notes that an item was created at `at`.
    fn record_created(&mut self, at: DateTime<Utc>) {
        let _ = at;
    }

    /// Notes that item `id` was completed at `at`.
    fn record_completed(&mut self, id: TodoId, at: DateTime<Utc>) {
        let _ = (id, at);
    }
}

/// Constant demo series, Monday through Sunday.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedActivityLog;

impl FixedActivityLog {
    /// The series every call returns.
    pub const SERIES: WeeklyActivity = [
        DailyActivity::new(Weekday::Mon, 3, 4),
        DailyActivity::new(Weekday::Tue, 5, 3),
        DailyActivity::new(Weekday::Wed, 2, 6),
        DailyActivity::new(Weekday::Thu, 7, 5),
        DailyActivity::new(Weekday::Fri, 4, 2),
        DailyActivity::new(Weekday::Sat, 6, 4),
        DailyActivity::new(Weekday::Sun, 3, 1),
    ];
}

impl ActivityLog for FixedActivityLog {
    fn trailing_week(&self, _today: NaiveDate) -> WeeklyActivity {
        Self::SERIES
    }
}

/// Activity log fed by the application as items are created and completed.
///
/// Entries older than the trailing window relative to the newest recorded
/// instant are pruned on every write, so memory stays bounded by a week of
/// activity.
///
/// An item counts as completed at most once per day. Reopening and finishing
/// it again on the same day is not a second completion.
#[derive(Debug, Clone, Default)]
pub struct RecordingActivityLog {
    created: Vec<DateTime<Utc>>,
    completed: Vec<(TodoId, DateTime<Utc>)>,
}

impl RecordingActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn count_on<'a>(entries: impl Iterator<Item = &'a DateTime<Utc>>, date: NaiveDate) -> u32 {
        let count = entries.filter(|at| at.date_naive() == date).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn cutoff(newest: DateTime<Utc>) -> Option<NaiveDate> {
        newest.date_naive().checked_sub_days(Days::new(WINDOW_DAYS - 1))
    }
}

impl ActivityLog for RecordingActivityLog {
    fn trailing_week(&self, today: NaiveDate) -> WeeklyActivity {
        let start = today
            .checked_sub_days(Days::new(WINDOW_DAYS - 1))
            .unwrap_or(today);

        std::array::from_fn(|offset| {
            let date = start
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(today);
            DailyActivity {
                day: date.weekday(),
                completed: Self::count_on(self.completed.iter().map(|(_, at)| at), date),
                created: Self::count_on(self.created.iter(), date),
            }
        })
    }

    fn record_created(&mut self, at: DateTime<Utc>) {
        self.created.push(at);
        if let Some(cutoff) = Self::cutoff(at) {
            self.created.retain(|entry| entry.date_naive() >= cutoff);
        }
    }

    fn record_completed(&mut self, id: TodoId, at: DateTime<Utc>) {
        let day = at.date_naive();
        let already = self
            .completed
            .iter()
            .any(|(done, entry)| *done == id && entry.date_naive() == day);
        if !already {
            self.completed.push((id, at));
        }
        if let Some(cutoff) = Self::cutoff(at) {
            self.completed.retain(|(_, entry)| entry.date_naive() >= cutoff);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn fixed_series_ignores_the_date() {
        let log = FixedActivityLog;
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let friday = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();

        assert_eq!(log.trailing_week(monday), log.trailing_week(friday));
        assert_eq!(log.trailing_week(monday)[3].label(), "Thu");
        assert_eq!(log.trailing_week(monday)[3].completed, 7);
    }

    #[test]
    fn recording_log_buckets_trailing_week_oldest_first() {
        let mut log = RecordingActivityLog::new();
        log.record_created(at(10, 9));
        log.record_created(at(10, 17));
        log.record_completed(TodoId::new(), at(12, 8));
        log.record_created(at(16, 23));

        // 2025-06-16 is a Monday, so the window runs Tue 10th .. Mon 16th.
        let week = log.trailing_week(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());

        assert_eq!(week[0].day, Weekday::Tue);
        assert_eq!(week[0].created, 2);
        assert_eq!(week[2].completed, 1);
        assert_eq!(week[6].day, Weekday::Mon);
        assert_eq!(week[6].created, 1);
        let total_created: u32 = week.iter().map(|d| d.created).sum();
        assert_eq!(total_created, 3);
    }

    #[test]
    fn recording_log_forgets_days_outside_the_window() {
        let mut log = RecordingActivityLog::new();
        log.record_created(at(1, 12));
        log.record_created(at(20, 12));

        let week = log.trailing_week(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
        let total_created: u32 = week.iter().map(|d| d.created).sum();
        assert_eq!(total_created, 1);
        assert_eq!(log.created.len(), 1);
    }

    #[test]
    fn recompleting_an_item_counts_once_per_day() {
        let mut log = RecordingActivityLog::new();
        let id = TodoId::new();
        log.record_completed(id, at(10, 9));
        log.record_completed(id, at(10, 11));
        log.record_completed(TodoId::new(), at(10, 12));
        log.record_completed(id, at(11, 9));

        let week = log.trailing_week(NaiveDate::from_ymd_opt(2025, 6, 11).unwrap());
        assert_eq!(week[5].completed, 2);
        assert_eq!(week[6].completed, 1);
    }
}
