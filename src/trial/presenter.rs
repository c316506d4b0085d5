use chrono::{DateTime, Utc};

/// Port trait for presenting the outcome of a trial evaluation.
///
/// This trait represents an **abstraction over presentation mechanisms**.
/// Implementations may surface the outcome via:
///
/// - Structured logging (see [`crate::trial::log_presenter::LogPresenter`])
/// - A UI dialog layer
/// - A headless recording double (for testing)
///
/// ## Design notes
///
/// - This trait is intentionally **minimal**:
///   - Exactly one of the two callbacks fires per evaluation
///   - `on_active` receives the computed expiry instant for display
///
/// - The trait does **not**:
///   - Format the expiry instant (locale and style are presentation concerns)
///   - Decide whether the trial *is* expired
///   - Trigger purchase flows
///
/// Those concerns belong to the embedding application.
///
/// ## Thread safety
///
/// Implementations must be:
/// - `Send`: usable across thread boundaries
/// - `Sync`: safely shared via `Arc`
pub trait TrialPresenter: Send + Sync {
    /// Called when the trial is still active.
    ///
    /// ## Arguments
    ///
    /// - `expires_at`: The instant the trial will expire.
    fn on_active(&self, expires_at: DateTime<Utc>);

    /// Called when the trial period is over.
    fn on_expired(&self);
}
