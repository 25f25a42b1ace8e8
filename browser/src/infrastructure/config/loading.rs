//! Background loading configuration.

use serde::Deserialize;

/// How the coordinator materializes browsers in the background.
#[derive(Debug, Deserialize, Clone)]
pub struct LoadingSettings {
    /// Materialize every browser on its own worker thread (default: true).
    ///
    /// When disabled, one background worker materializes browsers in
    /// registration order.
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            concurrent: default_concurrent(),
        }
    }
}

fn default_concurrent() -> bool {
    true
}
