//! # Trial Configuration Loader
//!
//! Provides a unified configuration loader for the trial policy.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is typically initialized once at application
//! startup, at the composition root that also chooses the `Clock`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `TRIAL_DURATION_DAYS` | Trial length in calendar days | `7` |
//! | `TRIAL_TIMEZONE` | IANA timezone for calendar-day addition | `"UTC"` |
//!
//! # Example
//! ```rust,no_run
//! use trialkit::config::trial::TrialConfig;
//!
//! let cfg = TrialConfig::from_env();
//! let tz = cfg.timezone().expect("valid timezone configured");
//! println!("trial runs {} days on {}", cfg.duration_days, tz);
//! ```

use std::env;

use anyhow::Result;
use chrono_tz::Tz;

use crate::config::env::{read_str, read_u32};
use crate::time::calendar::parse_timezone;
use crate::trial::policy::TrialPolicy;

/// Trial policy configuration.
#[derive(Clone, Debug)]
pub struct TrialConfig {
    /// Trial length in calendar days.
    pub duration_days: u32,
    /// IANA timezone name governing calendar-day addition.
    pub timezone: String,
}

impl TrialConfig {
    /// Loads trial configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses the supported environment variables and falls back to
    ///   defaults.
    ///
    /// Loading never fails: a malformed duration falls back to the
    /// default. Timezone validity is checked by [`TrialConfig::timezone`]
    /// so the composition root sees a configuration error early.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        TrialConfig {
            duration_days: read_u32("TRIAL_DURATION_DAYS", TrialPolicy::DEFAULT_DURATION_DAYS),
            timezone: read_str("TRIAL_TIMEZONE", "UTC"),
        }
    }

    /// Parses the configured timezone name.
    ///
    /// # Errors
    /// - When the configured name is not a valid IANA timezone.
    pub fn timezone(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env;

    #[test]
    fn from_env_uses_defaults_when_unset() {
        temp_env::with_vars(
            vec![
                ("TRIAL_DURATION_DAYS", None::<&str>),
                ("TRIAL_TIMEZONE", None),
            ],
            || {
                let cfg = TrialConfig::from_env();
                assert_eq!(cfg.duration_days, TrialPolicy::DEFAULT_DURATION_DAYS);
                assert_eq!(cfg.timezone, "UTC");
            },
        );
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            vec![
                ("TRIAL_DURATION_DAYS", Some("30")),
                ("TRIAL_TIMEZONE", Some("Australia/Melbourne")),
            ],
            || {
                let cfg = TrialConfig::from_env();
                assert_eq!(cfg.duration_days, 30);
                assert_eq!(cfg.timezone, "Australia/Melbourne");
            },
        );
    }

    #[test]
    fn malformed_duration_falls_back_to_default() {
        temp_env::with_vars(
            vec![("TRIAL_DURATION_DAYS", Some("one week"))],
            || {
                let cfg = TrialConfig::from_env();
                assert_eq!(cfg.duration_days, TrialPolicy::DEFAULT_DURATION_DAYS);
            },
        );
    }

    #[test]
    fn timezone_parses_valid_iana_names() {
        temp_env::with_vars(vec![("TRIAL_TIMEZONE", Some("Asia/Tokyo"))], || {
            let cfg = TrialConfig::from_env();
            assert_eq!(cfg.timezone().unwrap(), chrono_tz::Asia::Tokyo);
        });
    }

    #[test]
    fn timezone_rejects_invalid_names() {
        temp_env::with_vars(vec![("TRIAL_TIMEZONE", Some("Invalid/Timezone"))], || {
            let cfg = TrialConfig::from_env();
            let result = cfg.timezone();
            assert!(result.is_err());
        });
    }
}
