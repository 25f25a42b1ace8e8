//! Telemetry configuration for the media browser.
//!
//! This module defines logging and metrics settings.

use serde::Deserialize;

/// Telemetry configuration settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Service name attached to log output.
    pub service_name: String,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable output.
    #[serde(default = "default_true")]
    pub json: bool,
    /// Install an in-process Prometheus metrics recorder.
    #[serde(default)]
    pub metrics: bool,
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
