//! Active browser selection.

use std::sync::Arc;

use tracing::{debug, info};

use super::BrowserCoordinator;
use crate::browser::{BrowserId, MediaBrowser};
use crate::error::BrowserError;
use crate::infrastructure::events::{BrowserEvent, record_event};

impl BrowserCoordinator {
    /// The active browser, if one is selected.
    #[must_use]
    pub fn active_browser(&self) -> Option<Arc<dyn MediaBrowser>> {
        let id = self.active_browser_id()?;
        self.browser(&id)
    }

    /// Identity of the active browser, if one is selected.
    #[must_use]
    pub fn active_browser_id(&self) -> Option<BrowserId> {
        self.selection_tx.borrow().clone()
    }

    /// Makes `browser` the active browser.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::UnknownProvider`] if `browser` is not one of
    /// the instances this coordinator materialized. The previous selection
    /// is kept.
    pub fn select(&self, browser: &Arc<dyn MediaBrowser>) -> Result<(), BrowserError> {
        let member = self
            .browsers
            .lock()
            .iter()
            .any(|b| Arc::ptr_eq(b, browser));
        if !member {
            debug!(browser_id = %browser.id(), "Rejected selection of foreign browser");
            return Err(BrowserError::UnknownProvider(browser.id().clone()));
        }
        self.set_selection(Some(browser.id().clone()));
        Ok(())
    }

    /// Makes the materialized browser with identity `id` the active browser.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::UnknownProvider`] if no materialized browser
    /// has that identity. The previous selection is kept.
    pub fn select_by_id(&self, id: &BrowserId) -> Result<Arc<dyn MediaBrowser>, BrowserError> {
        let browser = self
            .browser(id)
            .ok_or_else(|| BrowserError::UnknownProvider(id.clone()))?;
        self.set_selection(Some(id.clone()));
        Ok(browser)
    }

    /// Clears the selection.
    pub fn clear_selection(&self) {
        self.set_selection(None);
    }

    /// Selects the configured default browser when it materializes, unless
    /// something is already selected.
    pub(super) fn apply_default_selection(&self, materialized: &BrowserId) {
        let is_default = self
            .settings
            .selection
            .default_browser
            .as_deref()
            .is_some_and(|default| default == materialized.as_str());
        if !is_default {
            return;
        }

        let applied = self.selection_tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(materialized.clone());
            true
        });
        if applied {
            info!(browser_id = %materialized, "Default browser selected");
            Self::selection_changed(None, Some(materialized));
        }
    }

    fn set_selection(&self, next: Option<BrowserId>) {
        let previous = self.selection_tx.send_replace(next.clone());
        if previous != next {
            info!(
                previous = ?previous.as_ref().map(BrowserId::as_str),
                current = ?next.as_ref().map(BrowserId::as_str),
                "Active browser changed"
            );
            Self::selection_changed(previous.as_ref(), next.as_ref());
        }
    }

    fn selection_changed(previous: Option<&BrowserId>, current: Option<&BrowserId>) {
        metrics::counter!("browser_selection_changes_total").increment(1);
        record_event(&BrowserEvent::SelectionChanged {
            previous: previous.map(ToString::to_string),
            current: current.map(ToString::to_string),
        });
    }
}
