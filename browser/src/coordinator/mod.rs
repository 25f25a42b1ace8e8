//! The shared browser coordinator.
//!
//! One [`BrowserCoordinator`] exists per process. It snapshots the global
//! registry on first access, materializes one browser per descriptor, and
//! tracks which browser is active.
//!
//! Two entry points exist:
//!
//! - [`BrowserCoordinator::shared`] materializes on the calling thread and
//!   returns a fully loaded coordinator.
//! - [`BrowserCoordinator::shared_without_loading`] returns at once and
//!   materializes on background threads, so a progress indicator can attach
//!   via [`BrowserCoordinator::subscribe_loading`] before the slow work runs.
//!
//! The materialized list is append-only and guarded by a single mutex that
//! is held only while pushing or copying the list, never while a factory
//! runs. A hung factory keeps the coordinator in
//! [`LoadingState::Loading`] indefinitely; there is no timeout.

mod loader;
mod selection;
mod shared;
pub mod state;

pub use state::{BrowserEntry, InstantiationFailure, LoadingState};

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use tokio::sync::watch;

use crate::browser::{BrowserId, MediaBrowser};
use crate::infrastructure::config::CoordinatorSettings;
use crate::registry::BrowserRegistry;

/// Owner of the materialized browsers and the active selection.
pub struct BrowserCoordinator {
    registry: Arc<BrowserRegistry>,
    settings: CoordinatorSettings,
    /// Append-only; the guard covers pushes and reads only.
    browsers: Mutex<Vec<Arc<dyn MediaBrowser>>>,
    failures: Mutex<Vec<InstantiationFailure>>,
    state: Mutex<LoadingState>,
    loaded: Condvar,
    loading_tx: watch::Sender<LoadingState>,
    /// Holds the selection as an identity key into `browsers`.
    selection_tx: watch::Sender<Option<BrowserId>>,
}

impl BrowserCoordinator {
    pub(crate) fn new(registry: Arc<BrowserRegistry>, settings: CoordinatorSettings) -> Self {
        let (loading_tx, _) = watch::channel(LoadingState::Unloaded);
        let (selection_tx, _) = watch::channel(None);
        Self {
            registry,
            settings,
            browsers: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            state: Mutex::new(LoadingState::Unloaded),
            loaded: Condvar::new(),
            loading_tx,
            selection_tx,
        }
    }

    /// Registry this coordinator loads from.
    #[must_use]
    pub fn registry(&self) -> &Arc<BrowserRegistry> {
        &self.registry
    }

    /// Settings the coordinator was created with.
    #[must_use]
    pub fn settings(&self) -> &CoordinatorSettings {
        &self.settings
    }

    /// Copy of the materialized browsers, in materialization order.
    #[must_use]
    pub fn browsers(&self) -> Vec<Arc<dyn MediaBrowser>> {
        self.browsers.lock().clone()
    }

    /// Identities of the materialized browsers, in materialization order.
    #[must_use]
    pub fn browser_ids(&self) -> Vec<BrowserId> {
        self.browsers.lock().iter().map(|b| b.id().clone()).collect()
    }

    /// Looks up a materialized browser by identity.
    #[must_use]
    pub fn browser(&self, id: &BrowserId) -> Option<Arc<dyn MediaBrowser>> {
        self.browsers.lock().iter().find(|b| b.id() == id).cloned()
    }

    /// Number of materialized browsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.browsers.lock().len()
    }

    /// Returns `true` if no browser has materialized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Menu entries for every materialized browser.
    #[must_use]
    pub fn entries(&self) -> Vec<BrowserEntry> {
        let selected = self.active_browser_id();
        self.browsers()
            .iter()
            .map(|b| BrowserEntry {
                id: b.id().clone(),
                label: b.label().to_string(),
                selected: selected.as_ref() == Some(b.id()),
            })
            .collect()
    }

    /// Browsers that failed to materialize, in the order they failed.
    #[must_use]
    pub fn failures(&self) -> Vec<InstantiationFailure> {
        self.failures.lock().clone()
    }

    /// Current loading state.
    #[must_use]
    pub fn loading_state(&self) -> LoadingState {
        *self.state.lock()
    }

    /// Subscribes to loading state changes.
    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<LoadingState> {
        self.loading_tx.subscribe()
    }

    /// Subscribes to selection changes.
    #[must_use]
    pub fn subscribe_selection(&self) -> watch::Receiver<Option<BrowserId>> {
        self.selection_tx.subscribe()
    }
}

impl std::fmt::Debug for BrowserCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserCoordinator")
            .field("state", &self.loading_state())
            .field("browsers", &self.browser_ids())
            .field("selected", &self.active_browser_id())
            .finish_non_exhaustive()
    }
}
