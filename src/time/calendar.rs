//! Calendar-day arithmetic based on `chrono` and `chrono-tz`.
//!
//! This module provides the one calendar operation the trial policy
//! needs: adding N **calendar days** to a UTC instant, evaluated in an
//! IANA timezone.
//!
//! # Provided Functions
//! - [`parse_timezone`]: Parses an IANA timezone name into a [`Tz`].
//! - [`add_days_in_tz`]: Adds calendar days to an instant in the given timezone.
//!
//! # Calendar Rule
//! - A "day" is a calendar day, not 24 hours: the result is *the same
//!   local wall-clock time, N days later*. Across a daylight-saving
//!   transition that is 23 or 25 real hours away.
//! - If the target wall-clock time is ambiguous (clocks rolled back),
//!   the **earliest** of the two instants is used.
//! - If the target wall-clock time does not exist (clocks sprang
//!   forward over it), the addition fails with [`CalendarError`].
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Asia/Tokyo"`
//!   or `"Australia/Melbourne"`. Invalid names are an error.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Days, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::calendar::CalendarError;

/// # parse_timezone
///
/// Parses an **IANA timezone name** into a [`Tz`].
///
/// ## Arguments
/// - `tz_name`: A string such as `"Australia/Melbourne"` or `"Asia/Tokyo"`.
///
/// ## Returns
/// - `Ok(Tz)` — The parsed timezone.
/// - `Err` — If the timezone name is invalid.
///
/// ## Example
/// ```
/// use trialkit::time::calendar::parse_timezone;
/// let tz = parse_timezone("Asia/Tokyo").unwrap();
/// assert_eq!(tz, chrono_tz::Asia::Tokyo);
/// ```
pub fn parse_timezone(tz_name: &str) -> Result<Tz> {
    Tz::from_str(tz_name).map_err(|_| anyhow!("Invalid timezone name: {}", tz_name))
}

/// # add_days_in_tz
///
/// Adds `days` **calendar days** to `base`, evaluated in `tz`.
///
/// The instant is converted to the timezone's local wall-clock time,
/// the day count is added to the local date, and the resulting local
/// time is resolved back to a UTC instant.
///
/// ## Returns
/// - `Ok(DateTime<Utc>)` — Same local wall-clock time, `days` days later.
/// - `Err(CalendarError)` — The target local time does not exist in
///   `tz`, or the arithmetic left the supported date range.
///
/// ## Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use trialkit::time::calendar::add_days_in_tz;
///
/// // Noon in New York the day before the 2025 spring-forward transition:
/// // "one day later" is the next local noon, only 23 real hours away.
/// let base = Utc.with_ymd_and_hms(2025, 3, 8, 17, 0, 0).unwrap();
/// let next = add_days_in_tz(base, 1, chrono_tz::America::New_York).unwrap();
/// assert_eq!(next - base, Duration::hours(23));
/// ```
pub fn add_days_in_tz(
    base: DateTime<Utc>,
    days: u32,
    tz: Tz,
) -> Result<DateTime<Utc>, CalendarError> {
    let local = base.with_timezone(&tz).naive_local();
    let shifted = local
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| CalendarError::new(days, base, tz))?;

    match tz.from_local_datetime(&shifted) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        // Clocks rolled back over the target wall time: take the first occurrence.
        LocalResult::Ambiguous(earliest, _latest) => Ok(earliest.with_timezone(&Utc)),
        // Clocks sprang forward over the target wall time.
        LocalResult::None => Err(CalendarError::new(days, base, tz)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parse_timezone_accepts_iana_names() {
        let tz = parse_timezone("Australia/Melbourne").unwrap();
        assert_eq!(tz, chrono_tz::Australia::Melbourne);
    }

    #[test]
    fn parse_timezone_rejects_invalid_names() {
        let result = parse_timezone("Invalid/Timezone");
        assert!(result.is_err());
    }

    #[test]
    fn adding_zero_days_is_identity() {
        let base = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();

        let result = add_days_in_tz(base, 0, chrono_tz::UTC).unwrap();

        assert_eq!(result, base);
    }

    #[test]
    fn utc_days_are_exactly_24_hours() {
        let base = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();

        let result = add_days_in_tz(base, 7, chrono_tz::UTC).unwrap();

        assert_eq!(result - base, Duration::days(7));
    }

    /// Spring forward: New York skips 02:00-03:00 on 2025-03-09,
    /// so the local day is only 23 real hours long.
    #[test]
    fn day_across_spring_forward_is_23_hours() {
        // 2025-03-08 12:00 EST (UTC-5)
        let base = Utc.with_ymd_and_hms(2025, 3, 8, 17, 0, 0).unwrap();

        let result = add_days_in_tz(base, 1, chrono_tz::America::New_York).unwrap();

        assert_eq!(result - base, Duration::hours(23));
    }

    /// Fall back: New York repeats 01:00-02:00 on 2025-11-02,
    /// so the local day is 25 real hours long.
    #[test]
    fn day_across_fall_back_is_25_hours() {
        // 2025-11-01 12:00 EDT (UTC-4)
        let base = Utc.with_ymd_and_hms(2025, 11, 1, 16, 0, 0).unwrap();

        let result = add_days_in_tz(base, 1, chrono_tz::America::New_York).unwrap();

        assert_eq!(result - base, Duration::hours(25));
    }

    /// A target wall time inside the spring-forward gap has no instant.
    #[test]
    fn nonexistent_local_time_is_a_calendar_error() {
        // 2025-03-08 02:30 EST; 02:30 does not exist on 2025-03-09.
        let base = Utc.with_ymd_and_hms(2025, 3, 8, 7, 30, 0).unwrap();

        let err = add_days_in_tz(base, 1, chrono_tz::America::New_York).unwrap_err();

        assert_eq!(err.days, 1);
        assert_eq!(err.base, base);
        assert_eq!(err.timezone, chrono_tz::America::New_York);
    }

    /// A target wall time repeated by fall-back resolves to the
    /// earliest of the two instants.
    #[test]
    fn ambiguous_local_time_resolves_to_earliest_instant() {
        // 2025-11-01 01:30 EDT; 01:30 occurs twice on 2025-11-02.
        let base = Utc.with_ymd_and_hms(2025, 11, 1, 5, 30, 0).unwrap();

        let result = add_days_in_tz(base, 1, chrono_tz::America::New_York).unwrap();

        // Earliest occurrence is still on EDT (UTC-4), exactly 24h later.
        assert_eq!(result - base, Duration::hours(24));
    }
}
