//! Shared test utilities for integration tests.
//!
//! Provides browsers with controllable factories: slow, failing and
//! panicking ones, plus a counter of factory invocations.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use media_browser::content::{MediaItem, MediaKind, MediaNode};
use media_browser::{BrowserDescriptor, BrowserError, BrowserId, BrowserLoadState, MediaBrowser};

/// Browser serving a fixed single-item tree.
pub struct TestBrowser {
    id: BrowserId,
    label: String,
}

impl TestBrowser {
    pub fn arc(id: &BrowserId, label: &str) -> Arc<dyn MediaBrowser> {
        Arc::new(Self {
            id: id.clone(),
            label: label.to_string(),
        })
    }
}

#[async_trait]
impl MediaBrowser for TestBrowser {
    fn id(&self) -> &BrowserId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn load_state(&self) -> BrowserLoadState {
        BrowserLoadState::Ready
    }

    async fn populate(&self) -> Result<MediaNode, BrowserError> {
        Ok(MediaNode::new(self.label.clone()).with_item(MediaItem {
            title: format!("{} item", self.id),
            path: format!("/media/{}", self.id).into(),
            kind: MediaKind::Image,
        }))
    }
}

/// Counts factory invocations across descriptors.
#[derive(Clone, Default)]
pub struct FactoryCalls(Arc<AtomicUsize>);

impl FactoryCalls {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Descriptor whose factory sleeps for `delay` before succeeding.
pub fn slow_descriptor(name: &str, delay: Duration, calls: &FactoryCalls) -> BrowserDescriptor {
    let calls = calls.clone();
    let label = name.to_uppercase();
    BrowserDescriptor::new(name, label.clone()).with_factory(move |id| {
        calls.record();
        thread::sleep(delay);
        Ok(TestBrowser::arc(id, &label))
    })
}

/// Descriptor whose factory always fails.
pub fn failing_descriptor(name: &str, calls: &FactoryCalls) -> BrowserDescriptor {
    let calls = calls.clone();
    BrowserDescriptor::new(name, name.to_uppercase()).with_factory(move |id| {
        calls.record();
        Err(BrowserError::instantiation(id, "library not found"))
    })
}

/// Descriptor whose factory panics.
pub fn panicking_descriptor(name: &str, calls: &FactoryCalls) -> BrowserDescriptor {
    let calls = calls.clone();
    BrowserDescriptor::new(name, name.to_uppercase()).with_factory(move |_| {
        calls.record();
        panic!("corrupt library database");
    })
}

pub fn id(value: &str) -> BrowserId {
    BrowserId::new(value).expect("valid id")
}

pub fn names(ids: &[BrowserId]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}
