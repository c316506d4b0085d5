//! # trialkit
//!
//! Common foundation library for time-limited trial periods.
//!
//! This crate provides a small, deterministic-testable trial-period
//! policy built around an injectable clock:
//! - Clock port and adapters (`time`)
//! - Trial policy, status and presentation port (`trial`)
//! - Environment-based configuration (`config`)
//! - Common error types (`error`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use std::sync::Arc;
//! use trialkit::time::system_clock::SystemClock;
//! use trialkit::trial::policy::TrialPolicy;
//!
//! let policy = TrialPolicy::new(Arc::new(SystemClock::default()));
//! assert!(!policy.is_expired().unwrap());
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;
pub use dotenvy;
pub use serde;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod time;
pub mod trial;
