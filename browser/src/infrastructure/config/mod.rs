//! Configuration management for the media browser.
//!
//! Settings are layered from built-in defaults and `MEDIA_BROWSER__*`
//! environment variables (double underscore separates sections, e.g.
//! `MEDIA_BROWSER__LOADING__CONCURRENT=false`).
//!
//! # Example
//!
//! ```
//! use media_browser::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! ```

pub mod folders;
pub mod loading;
pub mod selection;
pub mod telemetry;

pub use folders::FolderSettings;
pub use loading::LoadingSettings;
pub use selection::SelectionSettings;
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "MEDIA_BROWSER";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Telemetry settings.
    pub telemetry: TelemetrySettings,
    /// Background loading settings.
    #[serde(default)]
    pub loading: LoadingSettings,
    /// Initial selection settings.
    #[serde(default)]
    pub selection: SelectionSettings,
    /// Folder browser settings.
    #[serde(default)]
    pub folders: FolderSettings,
}

/// The part of [`Settings`] consumed by the shared coordinator.
#[derive(Debug, Clone, Default)]
pub struct CoordinatorSettings {
    /// Background loading settings.
    pub loading: LoadingSettings,
    /// Initial selection settings.
    pub selection: SelectionSettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(Self::environment())
    }

    /// Builds settings from defaults and the given environment source.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("telemetry.service_name", "media-browser")?
            .set_default("telemetry.log_level", telemetry::default_log_level())?
            .set_default("telemetry.json", true)?
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }

    /// Environment source with the crate's prefix and list handling.
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("folders.roots")
            .try_parsing(true)
    }

    /// Extracts the coordinator settings.
    #[must_use]
    pub fn coordinator(&self) -> CoordinatorSettings {
        CoordinatorSettings {
            loading: self.loading.clone(),
            selection: self.selection.clone(),
        }
    }
}
