//! Materialization of registered browsers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::{BrowserCoordinator, InstantiationFailure, LoadingState};
use crate::browser::MediaBrowser;
use crate::error::BrowserError;
use crate::infrastructure::events::{BrowserEvent, record_event};
use crate::registry::{RegisteredBrowser, RegistrySnapshot};

impl BrowserCoordinator {
    /// Moves `Unloaded → Loading` and snapshots the registry.
    ///
    /// Returns `None` if loading already started elsewhere.
    fn begin_loading(&self) -> Option<RegistrySnapshot> {
        let mut state = self.state.lock();
        if *state != LoadingState::Unloaded {
            return None;
        }
        *state = LoadingState::Loading;
        self.loading_tx.send_replace(LoadingState::Loading);
        let snapshot = self.registry.list();
        drop(state);

        info!(browsers = snapshot.len(), "Loading browsers");
        record_event(&BrowserEvent::LoadingChanged {
            state: LoadingState::Loading,
        });
        Some(snapshot)
    }

    fn finish_loading(&self) {
        let mut state = self.state.lock();
        *state = LoadingState::Loaded;
        self.loading_tx.send_replace(LoadingState::Loaded);
        self.loaded.notify_all();
        drop(state);

        info!(
            browsers = self.len(),
            failures = self.failures.lock().len(),
            "Browsers loaded"
        );
        record_event(&BrowserEvent::LoadingChanged {
            state: LoadingState::Loaded,
        });
    }

    /// Materializes every registered browser on the calling thread, in
    /// registry order, or waits for a load already in progress.
    pub(crate) fn load_blocking(&self) {
        match self.begin_loading() {
            Some(snapshot) => {
                for entry in &snapshot {
                    self.materialize(entry);
                }
                self.finish_loading();
            }
            None => self.wait_until_loaded_blocking(),
        }
    }

    /// Starts materialization on background threads and returns at once.
    ///
    /// Does nothing if loading already started.
    pub(crate) fn load_in_background(&'static self) {
        let Some(snapshot) = self.begin_loading() else {
            return;
        };
        let concurrent = self.settings.loading.concurrent;
        let worker_snapshot = snapshot.clone();

        let spawned = thread::Builder::new()
            .name("browser-loader".into())
            .spawn(move || {
                if concurrent {
                    self.materialize_concurrently(&worker_snapshot);
                } else {
                    for entry in &worker_snapshot {
                        self.materialize(entry);
                    }
                }
                self.finish_loading();
            });

        if let Err(e) = spawned {
            warn!(error = %e, "Failed to spawn browser loader, loading on caller thread");
            for entry in &snapshot {
                self.materialize(entry);
            }
            self.finish_loading();
        }
    }

    /// One scoped worker per browser; entries land in completion order.
    fn materialize_concurrently(&self, snapshot: &RegistrySnapshot) {
        thread::scope(|scope| {
            for entry in snapshot {
                let spawned = thread::Builder::new()
                    .name(format!("browser-loader-{}", entry.id()))
                    .spawn_scoped(scope, move || self.materialize(entry));
                if let Err(e) = spawned {
                    warn!(browser_id = %entry.id(), error = %e, "Failed to spawn worker, materializing inline");
                    self.materialize(entry);
                }
            }
        });
    }

    /// Runs one factory outside the list guard and records the outcome.
    fn materialize(&self, entry: &RegisteredBrowser) {
        debug!(browser_id = %entry.id(), "Materializing browser");

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.instantiate()))
            .unwrap_or_else(|payload| {
                Err(BrowserError::instantiation(
                    entry.id(),
                    format!("factory panicked: {}", panic_message(payload.as_ref())),
                ))
            });

        match outcome {
            Ok(browser) => self.append(browser),
            Err(err) => self.record_failure(entry, &err),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn append(&self, browser: Arc<dyn MediaBrowser>) {
        let position = {
            let mut browsers = self.browsers.lock();
            browsers.push(Arc::clone(&browser));
            browsers.len() - 1
        };

        metrics::gauge!("browser_materialized").set((position + 1) as f64);
        debug!(browser_id = %browser.id(), position, "Browser materialized");
        record_event(&BrowserEvent::Materialized {
            id: browser.id().to_string(),
            position,
        });

        self.apply_default_selection(browser.id());
    }

    fn record_failure(&self, entry: &RegisteredBrowser, err: &BrowserError) {
        let reason = match err {
            BrowserError::Instantiation { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        warn!(browser_id = %entry.id(), %reason, "Browser failed to materialize");
        metrics::counter!("browser_instantiation_failures_total").increment(1);
        record_event(&BrowserEvent::InstantiationFailed {
            id: entry.id().to_string(),
            reason: reason.clone(),
        });

        self.failures.lock().push(InstantiationFailure {
            id: entry.id().clone(),
            reason,
            at: Utc::now(),
        });
    }

    fn wait_until_loaded_blocking(&self) {
        let mut state = self.state.lock();
        while !state.is_loaded() {
            self.loaded.wait(&mut state);
        }
    }

    /// Waits until loading finished, without blocking the async runtime.
    ///
    /// Returns immediately if the coordinator is already loaded. Never
    /// returns while the coordinator is `Unloaded` and nobody starts loading.
    pub async fn wait_until_loaded(&self) {
        let mut rx = self.loading_tx.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here.
        let _ = rx.wait_for(|state| state.is_loaded()).await;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
