use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::error::calendar::CalendarError;
use crate::time::calendar::add_days_in_tz;
use crate::time::clock::Clock;

/// A [`Clock`] implementation whose "now" is set by the test.
///
/// # Overview
/// `TestClock` starts at a fixed instant and only moves when a test
/// advances it, making time-dependent behavior deterministic without
/// waiting real time.
///
/// The stored instant lives behind a `Mutex` so that a shared
/// `Arc<TestClock>` handle can be advanced while the code under test
/// holds an `Arc<dyn Clock>` clone of the same clock. This is the only
/// mutable shared state in the crate.
///
/// # Design Notes
/// - Second-based travel is plain instant arithmetic.
/// - Day-based travel is **calendar** travel: it goes through
///   [`add_days_in_tz`] in the clock's configured timezone, so crossing
///   a daylight-saving transition moves 23 or 25 real hours.
/// - Negative second offsets are accepted; the trial policy's
///   monotonicity guarantees only cover non-negative travel.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use trialkit::time::clock::Clock;
/// use trialkit::time::test_clock::TestClock;
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let clock = TestClock::new(start);
///
/// clock.advance_by_secs(90);
/// assert_eq!(clock.now(), start + chrono::Duration::seconds(90));
/// ```
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
    tz: Tz,
}

impl TestClock {
    /// Creates a `TestClock` starting at `start`, with day travel
    /// evaluated on the UTC calendar.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_timezone(start, chrono_tz::UTC)
    }

    /// Creates a `TestClock` whose day travel is evaluated in `tz`.
    pub fn with_timezone(start: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            now: Mutex::new(start),
            tz,
        }
    }

    /// Shifts the stored instant by `seconds`, permanently changing
    /// what subsequent [`Clock::now`] calls return.
    pub fn advance_by_secs(&self, seconds: i64) {
        let mut now = self.now.lock().expect("TestClock state poisoned");
        *now += Duration::seconds(seconds);
    }

    /// Shifts the stored instant by `days` **calendar days** in the
    /// clock's timezone.
    ///
    /// # Errors
    /// Fails with [`CalendarError`] when the target wall-clock time is
    /// undefined in the clock's timezone (see [`add_days_in_tz`]).
    pub fn advance_by_days(&self, days: u32) -> Result<(), CalendarError> {
        let mut now = self.now.lock().expect("TestClock state poisoned");
        *now = add_days_in_tz(*now, days, self.tz)?;
        Ok(())
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("TestClock state poisoned")
    }
}
