//! The capability interface every registered media browser implements.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::content::MediaNode;
use crate::error::BrowserError;

/// Stable identity of a browser type.
///
/// Identities are non-empty and contain no whitespace or control characters,
/// so they can double as menu tags and configuration keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BrowserId(String);

impl BrowserId {
    /// Creates an identity, rejecting empty or whitespace-bearing values.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::InvalidProvider`] if `value` is not a valid identity.
    pub fn new(value: impl Into<String>) -> Result<Self, BrowserError> {
        let value = value.into();
        if value.is_empty() {
            return Err(BrowserError::InvalidProvider {
                id: value,
                reason: "identity must not be empty".into(),
            });
        }
        if value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(BrowserError::InvalidProvider {
                id: value,
                reason: "identity must not contain whitespace or control characters".into(),
            });
        }
        Ok(Self(value))
    }

    /// Identity from a literal known to be valid.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(Self::new(value).is_ok(), "invalid static identity {value:?}");
        Self(value.to_string())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrowserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for BrowserId {
    type Error = BrowserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Content state reported by a single browser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserLoadState {
    /// Content has not been requested yet.
    #[default]
    Idle,
    /// `populate` is running.
    Populating,
    /// The last `populate` call succeeded.
    Ready,
    /// The last `populate` call failed.
    Failed,
}

/// A live media browser, materialized from a registered descriptor.
///
/// Implementations are shared between the coordinator and its readers, so
/// they must be `Send + Sync` and use interior mutability for any state
/// updated by [`MediaBrowser::populate`].
#[async_trait]
pub trait MediaBrowser: Send + Sync {
    /// Stable identity, equal to the identity of the descriptor it came from.
    fn id(&self) -> &BrowserId;

    /// Human-readable label shown in selection menus.
    fn label(&self) -> &str;

    /// Current content load state.
    fn load_state(&self) -> BrowserLoadState;

    /// Produces the browser's content tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying media source cannot be read.
    async fn populate(&self) -> Result<MediaNode, BrowserError>;
}

impl fmt::Debug for dyn MediaBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBrowser")
            .field("id", self.id())
            .field("label", &self.label())
            .field("load_state", &self.load_state())
            .finish()
    }
}
