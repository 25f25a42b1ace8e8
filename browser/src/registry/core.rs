//! Browser registry core implementation.
//!
//! This module provides the [`BrowserRegistry`], an insertion-ordered set of
//! browser descriptors keyed by identity.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::descriptor::{BrowserDescriptor, RegisteredBrowser};
use crate::browser::BrowserId;
use crate::error::BrowserError;
use crate::infrastructure::events::{BrowserEvent, record_event};

/// Result of a successful [`BrowserRegistry::register`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The descriptor was appended.
    Added,
    /// A descriptor with the same identity was already present; nothing changed.
    AlreadyRegistered,
}

/// Insertion-ordered table of browser descriptors.
///
/// Entries are stored copy-on-write: every mutation swaps in a fresh slice, so
/// [`BrowserRegistry::list`] hands out a snapshot without copying and without
/// holding the lock while callers iterate.
pub struct BrowserRegistry {
    entries: RwLock<Arc<[RegisteredBrowser]>>,
}

impl BrowserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Registers a browser descriptor.
    ///
    /// Registering an identity that is already present is a no-op and reports
    /// [`Registration::AlreadyRegistered`]; the existing entry is kept.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::InvalidProvider`] if the descriptor has an
    /// invalid identity, an empty label or no factory. The registry is left
    /// unchanged.
    pub fn register(&self, descriptor: BrowserDescriptor) -> Result<Registration, BrowserError> {
        let entry = descriptor.validate()?;

        let mut entries = self.entries.write();
        if entries.iter().any(|e| e.id() == entry.id()) {
            debug!(browser_id = %entry.id(), "Browser already registered");
            return Ok(Registration::AlreadyRegistered);
        }

        debug!(browser_id = %entry.id(), "Registering browser");
        let id = entry.id().to_string();
        let mut next = Vec::with_capacity(entries.len() + 1);
        next.extend(entries.iter().cloned());
        next.push(entry);
        *entries = Arc::from(next);
        drop(entries);

        metrics::counter!("browser_registrations_total").increment(1);
        record_event(&BrowserEvent::Registered { id });
        Ok(Registration::Added)
    }

    /// Removes the descriptor with the given identity.
    ///
    /// Returns `true` if something was removed. Unknown identities are not an
    /// error.
    pub fn unregister(&self, id: &BrowserId) -> bool {
        let mut entries = self.entries.write();
        if !entries.iter().any(|e| e.id() == id) {
            debug!(browser_id = %id, "Unregister ignored, browser not registered");
            return false;
        }

        debug!(browser_id = %id, "Unregistering browser");
        let next: Vec<RegisteredBrowser> =
            entries.iter().filter(|e| e.id() != id).cloned().collect();
        *entries = Arc::from(next);
        drop(entries);

        record_event(&BrowserEvent::Unregistered { id: id.to_string() });
        true
    }

    /// Returns a snapshot of the registered descriptors in insertion order.
    ///
    /// The snapshot is unaffected by later registry mutations.
    #[must_use]
    pub fn list(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            entries: Arc::clone(&self.entries.read()),
        }
    }

    /// Looks up a descriptor by identity.
    #[must_use]
    pub fn get(&self, id: &BrowserId) -> Option<RegisteredBrowser> {
        self.entries.read().iter().find(|e| e.id() == id).cloned()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &BrowserId) -> bool {
        self.entries.read().iter().any(|e| e.id() == id)
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BrowserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, restartable view of a registry at one point in time.
///
/// Iterating borrows lazily from the shared slice; the snapshot can be
/// iterated any number of times and cloned cheaply.
#[derive(Clone, Debug)]
pub struct RegistrySnapshot {
    entries: Arc<[RegisteredBrowser]>,
}

impl RegistrySnapshot {
    /// Iterates descriptors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredBrowser> {
        self.entries.iter()
    }

    /// Identities in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<BrowserId> {
        self.iter().map(|e| e.id().clone()).collect()
    }

    /// Number of descriptors in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RegistrySnapshot {
    type Item = &'a RegisteredBrowser;
    type IntoIter = std::slice::Iter<'a, RegisteredBrowser>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
