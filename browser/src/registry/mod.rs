//! Browser registry for pluggable media browser types.
//!
//! Implementers add themselves with [`register_browser`] and remove themselves
//! with [`unregister_browser`]. The [`BrowserCoordinator`](crate::coordinator::BrowserCoordinator)
//! snapshots the registry when it starts loading.

pub mod core;
pub mod descriptor;
pub mod global;

pub use self::core::{BrowserRegistry, Registration, RegistrySnapshot};
pub use descriptor::{BrowserDescriptor, BrowserFactory, RegisteredBrowser};
pub use global::{global_registry, register_browser, unregister_browser};
