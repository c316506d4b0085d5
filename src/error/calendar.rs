use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// A common error representing that calendar arithmetic failed.
///
/// This error is raised when adding calendar days to an instant does not
/// produce a well-defined result, e.g. the target wall-clock time does
/// not exist in the timezone (daylight-saving gap) or the arithmetic
/// leaves the supported date range.
///
/// # Design
/// - Infrastructure-agnostic (no UI / persistence dependency)
/// - Carries the failed operation's inputs for diagnostics
/// - Treated as unrecoverable by callers: it indicates a broken
///   calendar/timezone combination, not a transient runtime condition.
///   Retrying the same computation cannot succeed.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use trialkit::error::calendar::CalendarError;
///
/// let base = Utc.with_ymd_and_hms(2025, 3, 8, 17, 0, 0).unwrap();
/// let err = CalendarError::new(1, base, chrono_tz::America::New_York);
/// assert!(err.to_string().contains("1 day(s)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot add {days} day(s) to {base} in timezone {timezone}")]
pub struct CalendarError {
    /// Number of calendar days that were being added.
    pub days: u32,
    /// The UTC instant the addition started from.
    pub base: DateTime<Utc>,
    /// The IANA timezone the calendar arithmetic was evaluated in.
    pub timezone: Tz,
}

impl CalendarError {
    /// Create a new `CalendarError` for the failed day addition.
    pub fn new(days: u32, base: DateTime<Utc>, timezone: Tz) -> Self {
        Self {
            days,
            base,
            timezone,
        }
    }
}
