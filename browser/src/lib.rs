//! Media Browser - pluggable browser registry and shared coordinator.
//!
//! Media browsers (photo, music, movie libraries, ...) register themselves
//! with the [`registry`] and are materialized, listed and selected through
//! the process-wide [`coordinator::BrowserCoordinator`].
//!
//! ```no_run
//! use media_browser::{BrowserCoordinator, register_browser};
//! use media_browser::folder::FolderBrowser;
//! use media_browser::content::MediaKind;
//!
//! register_browser(FolderBrowser::descriptor(MediaKind::Image, vec!["/srv/photos".into()]))
//!     .expect("valid descriptor");
//!
//! let coordinator = BrowserCoordinator::shared();
//! for entry in coordinator.entries() {
//!     println!("{} ({})", entry.label, entry.id);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Browser capability interface and identities.
pub mod browser;
/// Content tree produced by browsers.
pub mod content;
/// Shared coordinator owning materialized browsers and the selection.
pub mod coordinator;
/// Error types.
pub mod error;
/// Bundled filesystem-backed browser.
pub mod folder;
/// Infrastructure components (config, telemetry, lifecycle events).
pub mod infrastructure;
/// Registry of browser descriptors.
pub mod registry;

#[cfg(test)]
mod testing;

pub use browser::{BrowserId, BrowserLoadState, MediaBrowser};
pub use coordinator::{BrowserCoordinator, BrowserEntry, InstantiationFailure, LoadingState};
pub use error::BrowserError;
pub use registry::{
    BrowserDescriptor, BrowserRegistry, Registration, RegistrySnapshot, register_browser,
    unregister_browser,
};
