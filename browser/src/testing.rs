//! Stub browsers shared by unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::browser::{BrowserId, BrowserLoadState, MediaBrowser};
use crate::content::MediaNode;
use crate::error::BrowserError;
use crate::registry::BrowserDescriptor;

/// Stub whose label is its identity in upper case, matching [`StubBrowser::descriptor`].
pub(crate) struct StubBrowser {
    id: BrowserId,
    label: String,
    state: Mutex<BrowserLoadState>,
}

impl StubBrowser {
    pub(crate) fn new(id: BrowserId) -> Self {
        Self {
            label: id.as_str().to_uppercase(),
            id,
            state: Mutex::new(BrowserLoadState::Idle),
        }
    }

    pub(crate) fn arc(id: &str) -> Arc<dyn MediaBrowser> {
        Arc::new(Self::new(BrowserId::new(id).expect("valid test id")))
    }

    pub(crate) fn factory(
    ) -> impl Fn(&BrowserId) -> Result<Arc<dyn MediaBrowser>, BrowserError> + Send + Sync + 'static
    {
        |id| Ok(Arc::new(StubBrowser::new(id.clone())) as Arc<dyn MediaBrowser>)
    }

    pub(crate) fn descriptor(id: &str) -> BrowserDescriptor {
        BrowserDescriptor::new(id, id.to_uppercase()).with_factory(Self::factory())
    }

    pub(crate) fn failing_descriptor(id: &str) -> BrowserDescriptor {
        BrowserDescriptor::new(id, id.to_uppercase())
            .with_factory(|id| Err(BrowserError::instantiation(id, "stub failure")))
    }
}

#[async_trait]
impl MediaBrowser for StubBrowser {
    fn id(&self) -> &BrowserId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn load_state(&self) -> BrowserLoadState {
        *self.state.lock()
    }

    async fn populate(&self) -> Result<MediaNode, BrowserError> {
        *self.state.lock() = BrowserLoadState::Ready;
        Ok(MediaNode::new(self.id.as_str()))
    }
}
