//! Loading state and failure records of the coordinator.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::browser::BrowserId;

/// Loading status of the coordinator.
///
/// Moves strictly forward: `Unloaded → Loading → Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    /// No entry point has been called yet.
    Unloaded,
    /// Browsers are being materialized.
    Loading,
    /// Every browser in the loading snapshot materialized or failed.
    Loaded,
}

impl LoadingState {
    /// Returns `true` once loading has finished.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Record of a browser that failed to materialize.
#[derive(Debug, Clone, Serialize)]
pub struct InstantiationFailure {
    /// Browser identity.
    pub id: BrowserId,
    /// Failure description.
    pub reason: String,
    /// When the failure was recorded.
    pub at: DateTime<Utc>,
}

/// Menu-ready description of a materialized browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserEntry {
    /// Browser identity.
    pub id: BrowserId,
    /// Menu label.
    pub label: String,
    /// Whether this browser is the active one.
    pub selected: bool,
}
