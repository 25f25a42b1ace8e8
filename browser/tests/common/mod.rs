//! Shared fixtures for coordinator integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use media_browser::content::MediaNode;
use media_browser::{BrowserDescriptor, BrowserError, BrowserId, BrowserLoadState, MediaBrowser};

/// Minimal browser labelled with its identity in upper case, like [`descriptor`].
pub struct FixtureBrowser {
    id: BrowserId,
    label: String,
}

impl FixtureBrowser {
    pub fn arc(id: &BrowserId) -> Arc<dyn MediaBrowser> {
        Arc::new(Self {
            id: id.clone(),
            label: id.as_str().to_uppercase(),
        })
    }
}

#[async_trait]
impl MediaBrowser for FixtureBrowser {
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
        Ok(MediaNode::new(self.id.as_str()))
    }
}

/// Descriptor whose factory builds a [`FixtureBrowser`].
pub fn descriptor(id: &str) -> BrowserDescriptor {
    BrowserDescriptor::new(id, id.to_uppercase()).with_factory(|id| Ok(FixtureBrowser::arc(id)))
}

pub fn id(value: &str) -> BrowserId {
    BrowserId::new(value).expect("valid id")
}

pub fn ids(browsers: &[BrowserId]) -> Vec<&str> {
    browsers.iter().map(BrowserId::as_str).collect()
}
