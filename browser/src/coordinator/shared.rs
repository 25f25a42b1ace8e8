//! Process-wide coordinator instance.

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::debug;

use super::BrowserCoordinator;
use crate::error::BrowserError;
use crate::infrastructure::config::CoordinatorSettings;
use crate::registry::global_registry;

static SHARED: OnceCell<BrowserCoordinator> = OnceCell::new();
static SETTINGS: OnceCell<CoordinatorSettings> = OnceCell::new();

impl BrowserCoordinator {
    /// Installs settings for the shared coordinator.
    ///
    /// Must run before the first call to [`BrowserCoordinator::shared`] or
    /// [`BrowserCoordinator::shared_without_loading`]; without it the
    /// coordinator uses [`CoordinatorSettings::default`].
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::AlreadyInitialized`] if the shared coordinator
    /// already exists or settings were already installed.
    pub fn configure(settings: CoordinatorSettings) -> Result<(), BrowserError> {
        if SHARED.get().is_some() {
            return Err(BrowserError::AlreadyInitialized);
        }
        SETTINGS
            .set(settings)
            .map_err(|_| BrowserError::AlreadyInitialized)
    }

    /// Returns the shared coordinator, fully loaded.
    ///
    /// The first call materializes every browser registered with the global
    /// registry on the calling thread, in registration order. If a background
    /// load is already running, this blocks until it finishes. Must not be
    /// called from inside a browser factory.
    pub fn shared() -> &'static Self {
        let coordinator = Self::instance();
        coordinator.load_blocking();
        coordinator
    }

    /// Returns the shared coordinator without waiting for it to load.
    ///
    /// If loading has not started, browsers are materialized on background
    /// threads and appear in [`BrowserCoordinator::browsers`] as they finish.
    /// Never blocks on browser factories.
    pub fn shared_without_loading() -> &'static Self {
        let coordinator = Self::instance();
        coordinator.load_in_background();
        coordinator
    }

    /// Returns the shared coordinator if it has been created.
    #[must_use]
    pub fn try_shared() -> Option<&'static Self> {
        SHARED.get()
    }

    fn instance() -> &'static Self {
        SHARED.get_or_init(|| {
            let settings = SETTINGS.get_or_init(CoordinatorSettings::default).clone();
            debug!(?settings, "Creating shared browser coordinator");
            Self::new(Arc::clone(global_registry()), settings)
        })
    }
}
