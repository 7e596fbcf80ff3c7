//! Time source abstraction.
//!
//! The store stamps `created_at` and the activity log buckets by calendar day,
//! so both read time through [`Clock`] instead of calling `Utc::now()` directly.
//! Production code uses [`SystemClock`]; tests use [`FixedClock`].

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use tickoff::store::{Clock, FixedClock};
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// clock.advance(Duration::days(1));
/// assert_eq!(clock.now(), start + Duration::days(1));
/// ```
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    /// Moves the clock forward (or backward, for a negative duration).
    pub fn advance(&self, by: chrono::Duration) {
        if let Ok(mut time) = self.time.lock() {
            *time += by;
        }
    }

    /// Jumps the clock to `time`.
    pub fn set(&self, time: DateTime<Utc>) {
        if let Ok(mut current) = self.time.lock() {
            *current = time;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |time| *time)
    }
}
