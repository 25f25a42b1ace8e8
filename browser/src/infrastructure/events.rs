use serde::Serialize;
use tracing::{info, info_span};

use crate::coordinator::LoadingState;

/// Lifecycle event of the browser registry or coordinator.
/// Structured for JSON serialization so presenters and log pipelines can follow
/// registration, loading and selection without parsing free text.
#[derive(Debug, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum BrowserEvent {
    /// A descriptor was added to a registry.
    Registered {
        /// Browser identity.
        id: String,
    },
    /// A descriptor was removed from a registry.
    Unregistered {
        /// Browser identity.
        id: String,
    },
    /// A browser instance joined the materialized list.
    Materialized {
        /// Browser identity.
        id: String,
        /// Index in the materialized list.
        position: usize,
    },
    /// A factory failed and its browser was left out.
    InstantiationFailed {
        /// Browser identity.
        id: String,
        /// Failure description.
        reason: String,
    },
    /// The coordinator moved to a new loading state.
    LoadingChanged {
        /// New state.
        state: LoadingState,
    },
    /// The active browser changed.
    SelectionChanged {
        /// Previously selected identity.
        previous: Option<String>,
        /// Newly selected identity.
        current: Option<String>,
    },
}

/// Logs a lifecycle event to the `browser_events` target as structured JSON.
/// Subscribers can filter on the target to route these into a separate sink.
pub fn record_event(event: &BrowserEvent) {
    let span = info_span!(target: "browser_events", "browser_event");
    let _enter = span.enter();

    let json = serde_json::to_string(event).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
    info!(target: "browser_events", event_json = %json, "Browser Lifecycle Event");
}
