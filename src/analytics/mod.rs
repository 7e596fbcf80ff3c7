//! Productivity analytics.
//!
//! - [`stats`]: Pure aggregation of the collection into a [`StatisticsSnapshot`]
//! - [`activity`]: The injected trailing-week activity series

pub mod activity;
pub mod stats;

pub use activity::{
    ActivityLog, DailyActivity, FixedActivityLog, RecordingActivityLog, WeeklyActivity,
};
pub use stats::{
    average_per_day, completion_rate, compute, productivity_score, streak, StatisticsSnapshot,
};
