use chrono::{DateTime, Utc};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current UTC instant based on the operating
/// system's wall clock. It is non-deterministic and intended for
/// production composition roots.
///
/// # Design Notes
/// - Reading the system clock has no failure modes; the call is total.
/// - Timezone interpretation does not happen here. Anything that needs
///   a local calendar goes through [`crate::time::calendar`].
///
/// # Responsibility
/// - Choosing which `Clock` implementation to use is the responsibility
///   of the **composition root** (e.g. `main.rs`).
/// - Application and domain logic should treat `Clock` as a trusted source.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new [`SystemClock`].
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    /// Returns the current UTC instant from the operating system.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_plausible_instant() {
        let clock = SystemClock::new();

        let now = clock.now();

        // Basic sanity checks:
        // - Year must be reasonable
        // - Month and day must be valid ranges
        assert!(now.year() >= 2000);
        assert!((1..=12).contains(&now.month()));
        assert!((1..=31).contains(&now.day()));
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock::default();

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
