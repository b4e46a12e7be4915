use crate::models::Snapshot;
use chrono::{DateTime, Duration, Utc};

/// Owned application state: the most recently published snapshot, if any.
///
/// There is exactly one way in, `publish`, and it replaces the whole
/// snapshot at once. A failed refresh never touches the state, so readers
/// either see the previous complete snapshot or none at all.
#[derive(Debug, Default)]
pub struct PortfolioState {
    snapshot: Option<Snapshot>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held snapshot with the result of one successful pass.
    pub fn publish(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Age of the held snapshot relative to `now`.
    pub fn staleness(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.snapshot.as_ref().map(|s| now - s.fetched_at)
    }
}
