use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::trial::TrialConfig;
use crate::error::calendar::CalendarError;
use crate::time::calendar::add_days_in_tz;
use crate::time::clock::Clock;
use crate::trial::presenter::TrialPresenter;
use crate::trial::status::TrialStatus;

/// A time-limited trial period, evaluated against an injected [`Clock`].
///
/// # Overview
///
/// `TrialPolicy` captures the install instant **once, at construction**,
/// from the injected clock, and answers "is this expired?" by comparing
/// the clock's current instant against `installed_at` plus the
/// configured number of calendar days.
///
/// The policy is read-only after construction. It holds no stored
/// status: "active" and "expired" are derived by comparing two instants
/// at query time.
///
/// # Expiry rule
///
/// - Expiry is keyed to the exact instant `duration_days` calendar days
///   after install (same local wall-clock time in the policy's
///   timezone), **not** midnight of the expiry day.
/// - The boundary is closed on the expired side: at exactly the expiry
///   instant the trial counts as expired.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::{TimeZone, Utc};
/// use trialkit::time::test_clock::TestClock;
/// use trialkit::trial::policy::TrialPolicy;
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let clock = Arc::new(TestClock::new(start));
/// let policy = TrialPolicy::new(clock.clone());
///
/// assert!(!policy.is_expired().unwrap());
///
/// clock.advance_by_days(7).unwrap();
/// assert!(policy.is_expired().unwrap());
/// ```
pub struct TrialPolicy {
    /// Instant the trial started. Set once at construction.
    installed_at: DateTime<Utc>,
    /// Trial length in calendar days. Immutable after construction.
    duration_days: u32,
    /// Calendar used for day addition.
    timezone: Tz,
    /// Shared time source; the policy reads time, it does not own it.
    clock: Arc<dyn Clock>,
}

impl TrialPolicy {
    /// Trial length used when none is configured.
    pub const DEFAULT_DURATION_DAYS: u32 = 7;

    /// Creates a policy installed "now" with the default duration,
    /// evaluating days on the UTC calendar.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_calendar(clock, Self::DEFAULT_DURATION_DAYS, chrono_tz::UTC)
    }

    /// Creates a policy installed "now" with an explicit duration,
    /// evaluating days on the UTC calendar.
    pub fn with_duration(clock: Arc<dyn Clock>, duration_days: u32) -> Self {
        Self::with_calendar(clock, duration_days, chrono_tz::UTC)
    }

    /// Creates a policy installed "now" with an explicit duration and
    /// calendar timezone.
    pub fn with_calendar(clock: Arc<dyn Clock>, duration_days: u32, timezone: Tz) -> Self {
        // Captured eagerly: the install instant is the construction
        // instant, not the first query.
        let installed_at = clock.now();
        Self {
            installed_at,
            duration_days,
            timezone,
            clock,
        }
    }

    /// Creates a policy from a loaded [`TrialConfig`].
    ///
    /// # Errors
    /// Fails when the configured timezone is not a valid IANA name.
    pub fn from_config(clock: Arc<dyn Clock>, config: &TrialConfig) -> Result<Self> {
        let timezone = config.timezone()?;
        Ok(Self::with_calendar(clock, config.duration_days, timezone))
    }

    /// The instant the trial was installed.
    pub fn installed_at(&self) -> DateTime<Utc> {
        self.installed_at
    }

    /// The trial length in calendar days.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// The timezone whose calendar governs day addition.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The instant the trial expires.
    ///
    /// Recomputed from `installed_at` and `duration_days` on every
    /// call, never cached. Advancing the clock does not move it.
    ///
    /// # Errors
    /// Fails with [`CalendarError`] when the day addition has no
    /// well-defined result in the policy's timezone.
    pub fn expires_at(&self) -> Result<DateTime<Utc>, CalendarError> {
        add_days_in_tz(self.installed_at, self.duration_days, self.timezone)
    }

    /// Whether the trial period is over.
    ///
    /// Returns `true` when the clock's current instant is at or past
    /// [`TrialPolicy::expires_at`]; the exact expiry instant counts as
    /// expired.
    pub fn is_expired(&self) -> Result<bool, CalendarError> {
        Ok(self.clock.now() >= self.expires_at()?)
    }

    /// Evaluates the trial into a [`TrialStatus`] snapshot.
    pub fn evaluate(&self) -> Result<TrialStatus, CalendarError> {
        let expires_at = self.expires_at()?;
        if self.clock.now() >= expires_at {
            Ok(TrialStatus::Expired)
        } else {
            Ok(TrialStatus::Active { expires_at })
        }
    }

    /// Evaluates the trial and dispatches exactly one presenter callback.
    ///
    /// Active trials receive the computed expiry instant via
    /// [`TrialPresenter::on_active`]; expired trials trigger
    /// [`TrialPresenter::on_expired`].
    pub fn present_to(&self, presenter: &dyn TrialPresenter) -> Result<(), CalendarError> {
        match self.evaluate()? {
            TrialStatus::Active { expires_at } => presenter.on_active(expires_at),
            TrialStatus::Expired => presenter.on_expired(),
        }
        Ok(())
    }
}
