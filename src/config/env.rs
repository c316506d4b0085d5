//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type
//! conversions and fallback defaults.
//!
//! These functions are typically used in configuration loading
//! (e.g. `TrialConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use trialkit::config::env::{read_str, read_u32};
//!
//! let days = read_u32("TRIAL_DURATION_DAYS", 7);
//! let tz = read_str("TRIAL_TIMEZONE", "UTC");
//! ```

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if the variable is missing or does
/// not parse.
///
/// # Example
/// ```rust,no_run
/// use trialkit::config::env::read_u32;
///
/// let days = read_u32("TRIAL_DURATION_DAYS", 7);
/// ```
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use trialkit::config::env::read_u32_from;
///
/// let val = read_u32_from(|_| Some("14".into()), "TRIAL_DURATION_DAYS", 7);
/// assert_eq!(val, 14);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a string from an environment variable, returning the provided
/// default if the variable is missing or blank.
///
/// Surrounding whitespace and quote characters are stripped.
///
/// # Example
/// ```rust,no_run
/// use trialkit::config::env::read_str;
///
/// let tz = read_str("TRIAL_TIMEZONE", "UTC");
/// ```
pub fn read_str(name: &str, default: &str) -> String {
    read_str_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
pub fn read_str_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            if s.is_empty() {
                default.to_string()
            } else {
                s.to_string()
            }
        }
        None => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_valid_number() {
        let got = read_u32_from(|_| Some("42".into()), "LIMIT", 10);
        assert_eq!(got, 42);
    }

    #[test]
    fn test_read_u32_trims_whitespace() {
        let got = read_u32_from(|_| Some("  14 ".into()), "LIMIT", 10);
        assert_eq!(got, 14);
    }

    #[test]
    fn test_read_u32_invalid_or_missing() {
        let got = read_u32_from(|_| Some("not_a_number".into()), "LIMIT", 99);
        assert_eq!(got, 99);

        let got = read_u32_from(|_| None, "LIMIT", 77);
        assert_eq!(got, 77);
    }

    #[test]
    fn test_read_str_returns_value() {
        let got = read_str_from(|_| Some("Asia/Tokyo".into()), "TZ", "UTC");
        assert_eq!(got, "Asia/Tokyo");
    }

    #[test]
    fn test_read_str_strips_quotes() {
        let got = read_str_from(|_| Some("\"Asia/Tokyo\"".into()), "TZ", "UTC");
        assert_eq!(got, "Asia/Tokyo");

        let got = read_str_from(|_| Some("'UTC'".into()), "TZ", "GMT");
        assert_eq!(got, "UTC");
    }

    #[test]
    fn test_read_str_default_when_missing_or_blank() {
        assert_eq!(read_str_from(|_| None, "TZ", "UTC"), "UTC");
        assert_eq!(read_str_from(|_| Some("   ".into()), "TZ", "UTC"), "UTC");
    }
}
