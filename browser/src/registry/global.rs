//! Process-wide registry used by the shared coordinator.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::core::{BrowserRegistry, Registration};
use super::descriptor::BrowserDescriptor;
use crate::browser::BrowserId;
use crate::error::BrowserError;

static GLOBAL_REGISTRY: Lazy<Arc<BrowserRegistry>> = Lazy::new(|| Arc::new(BrowserRegistry::new()));

/// Returns the process-wide browser registry.
#[must_use]
pub fn global_registry() -> &'static Arc<BrowserRegistry> {
    &GLOBAL_REGISTRY
}

/// Registers a browser type with the process-wide registry.
///
/// Browsers should register during their own initialization, before the
/// shared coordinator is first accessed; later registrations are not picked
/// up by a coordinator that already started loading.
///
/// # Errors
///
/// Returns [`BrowserError::InvalidProvider`] if the descriptor is invalid.
pub fn register_browser(descriptor: BrowserDescriptor) -> Result<Registration, BrowserError> {
    GLOBAL_REGISTRY.register(descriptor)
}

/// Removes a browser type from the process-wide registry.
///
/// Returns `true` if the identity was registered.
pub fn unregister_browser(id: &BrowserId) -> bool {
    GLOBAL_REGISTRY.unregister(id)
}
