use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The evaluated state of a trial period at a single point in time.
///
/// # Overview
///
/// `TrialStatus` is **derived, never stored**: a policy computes it on
/// demand by comparing the clock's "now" against the expiry instant.
/// There is no transition machinery, because there are no transition
/// side effects to run.
///
/// # Design Intent
///
/// - Keep the result of an evaluation transportable (logs, API
///   responses), hence the serde derives with an explicit tag.
/// - `Active` carries the expiry instant so presentation layers can
///   display it without re-asking the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TrialStatus {
    /// The trial is still running; `expires_at` is the instant it ends.
    Active { expires_at: DateTime<Utc> },
    /// The trial period is over.
    Expired,
}

impl TrialStatus {
    /// Returns `true` if the trial period is over.
    pub fn is_expired(&self) -> bool {
        matches!(self, TrialStatus::Expired)
    }

    /// Returns the expiry instant for an active trial, `None` once expired.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            TrialStatus::Active { expires_at } => Some(*expires_at),
            TrialStatus::Expired => None,
        }
    }
}
