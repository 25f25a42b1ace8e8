//! Error types for browser registration, selection and materialization.

use crate::browser::BrowserId;

/// Errors raised by the browser registry, the coordinator and browsers.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// The descriptor does not satisfy the browser capability contract.
    #[error("Invalid Browser '{id}': {reason}")]
    InvalidProvider {
        /// Identity as supplied by the caller (may itself be the invalid part).
        id: String,
        /// What the descriptor is missing.
        reason: String,
    },
    /// The selection target is not part of the materialized browser list.
    #[error("Unknown Browser: {0}")]
    UnknownProvider(BrowserId),
    /// A browser factory failed while the coordinator was materializing it.
    #[error("Browser '{id}' Failed To Instantiate: {reason}")]
    Instantiation {
        /// Browser whose factory failed.
        id: BrowserId,
        /// Failure description reported by the factory.
        reason: String,
    },
    /// A browser could not produce its content.
    #[error("Browser '{id}' Content Error: {reason}")]
    Content {
        /// Browser that failed.
        id: BrowserId,
        /// Failure description.
        reason: String,
    },
    /// Settings were supplied after the shared coordinator already exists.
    #[error("Coordinator Already Initialized")]
    AlreadyInitialized,
    /// Filesystem error from a filesystem-backed browser.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl BrowserError {
    /// Shorthand for an instantiation failure of `id`.
    pub fn instantiation(id: &BrowserId, reason: impl Into<String>) -> Self {
        Self::Instantiation {
            id: id.clone(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by misuse of the registration or
    /// selection API, as opposed to runtime failures inside a browser.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidProvider { .. } | Self::UnknownProvider(_) | Self::AlreadyInitialized
        )
    }
}
