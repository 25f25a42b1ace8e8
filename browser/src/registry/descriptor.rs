//! Browser descriptors: the registrable identity of a browser type.

use std::fmt;
use std::sync::Arc;

use crate::browser::{BrowserId, MediaBrowser};
use crate::error::BrowserError;

/// Factory that materializes a browser instance for a registered identity.
pub type BrowserFactory =
    Arc<dyn Fn(&BrowserId) -> Result<Arc<dyn MediaBrowser>, BrowserError> + Send + Sync>;

/// Registration request for a browser type.
///
/// A descriptor is validated when it is registered, not when it is built, so
/// the registry can report a descriptor that misses part of the capability
/// contract as [`BrowserError::InvalidProvider`].
#[derive(Clone)]
pub struct BrowserDescriptor {
    id: String,
    label: String,
    factory: Option<BrowserFactory>,
}

impl BrowserDescriptor {
    /// Starts a descriptor with the given identity and menu label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            factory: None,
        }
    }

    /// Sets the factory used to materialize the browser.
    #[must_use]
    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&BrowserId) -> Result<Arc<dyn MediaBrowser>, BrowserError> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Identity as supplied, before validation.
    #[must_use]
    pub fn raw_id(&self) -> &str {
        &self.id
    }

    /// Checks the capability contract and produces the registry entry.
    pub(crate) fn validate(self) -> Result<RegisteredBrowser, BrowserError> {
        let id = BrowserId::new(self.id)?;
        if self.label.trim().is_empty() {
            return Err(BrowserError::InvalidProvider {
                id: id.to_string(),
                reason: "label must not be empty".into(),
            });
        }
        let factory = self.factory.ok_or_else(|| BrowserError::InvalidProvider {
            id: id.to_string(),
            reason: "no factory supplied".into(),
        })?;
        Ok(RegisteredBrowser {
            id,
            label: self.label,
            factory,
        })
    }
}

impl fmt::Debug for BrowserDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// A validated descriptor held by a [`BrowserRegistry`](super::BrowserRegistry).
#[derive(Clone)]
pub struct RegisteredBrowser {
    id: BrowserId,
    label: String,
    factory: BrowserFactory,
}

impl RegisteredBrowser {
    /// Registered identity.
    #[must_use]
    pub fn id(&self) -> &BrowserId {
        &self.id
    }

    /// Menu label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the factory.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Instantiation`] if the factory fails or hands
    /// back a browser reporting a different identity or label.
    pub fn instantiate(&self) -> Result<Arc<dyn MediaBrowser>, BrowserError> {
        let browser = (self.factory)(&self.id).map_err(|e| match e {
            BrowserError::Instantiation { .. } => e,
            other => BrowserError::instantiation(&self.id, other.to_string()),
        })?;
        if browser.id() != &self.id {
            return Err(BrowserError::instantiation(
                &self.id,
                format!("factory produced browser '{}'", browser.id()),
            ));
        }
        if browser.label() != self.label {
            return Err(BrowserError::instantiation(
                &self.id,
                format!(
                    "browser label '{}' does not match registered label '{}'",
                    browser.label(),
                    self.label
                ),
            ));
        }
        Ok(browser)
    }
}

impl fmt::Debug for RegisteredBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredBrowser")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
