use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The port deals in UTC instants only. How an instant maps onto a
///   local calendar is the concern of [`crate::time::calendar`].
/// - This trait represents an **external capability**, similar to a
///   Repository or Mailer.
/// - There is deliberately no process-wide default clock: every consumer
///   receives its `Clock` via constructor injection.
///
/// # Typical Implementations
/// - `SystemClock`: Reads the OS clock
/// - `TestClock`: Returns a stored instant that tests can advance
pub trait Clock: Send + Sync {
    /// Returns the current instant as a [`DateTime<Utc>`].
    ///
    /// Implementations decide how "now" is determined
    /// (e.g. system time, fixed value, mocked time source).
    /// The call has no side effects and no failure modes.
    fn now(&self) -> DateTime<Utc>;
}
