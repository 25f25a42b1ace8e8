//! Initial selection configuration.

use serde::Deserialize;

/// Selection settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SelectionSettings {
    /// Browser identity selected automatically as soon as it materializes,
    /// unless something else has been selected first. Unset by default.
    pub default_browser: Option<String>,
}
