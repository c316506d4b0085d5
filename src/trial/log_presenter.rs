use chrono::{DateTime, Utc};
use tracing::info;

use crate::trial::presenter::TrialPresenter;

/// Logging-based implementation of [`TrialPresenter`].
///
/// ## Responsibilities
///
/// - Emits one structured `tracing` event per evaluation outcome
///
/// ## What this type does *not* do
///
/// - Render dialogs or other UI
/// - Localize or style the expiry instant
/// - Trigger purchase flows
///
/// Those concerns belong to the embedding application; this adapter is
/// the headless default for services and development builds.
#[derive(Clone, Debug, Default)]
pub struct LogPresenter;

impl LogPresenter {
    /// Constructs a new `LogPresenter`.
    pub fn new() -> Self {
        Self
    }
}

impl TrialPresenter for LogPresenter {
    fn on_active(&self, expires_at: DateTime<Utc>) {
        info!("trial active: expires_at={}", expires_at.to_rfc3339());
    }

    fn on_expired(&self) {
        info!("trial expired, purchase required");
    }
}
