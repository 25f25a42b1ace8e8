//! Folder browser configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the bundled folder browsers.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FolderSettings {
    /// Directories scanned by every folder browser. When empty, each browser
    /// falls back to the platform directory for its media kind.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}
