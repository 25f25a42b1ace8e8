//! Filesystem-backed media browser.
//!
//! A [`FolderBrowser`] walks a set of root directories and lists the files
//! whose extension matches its [`MediaKind`], one child node per root. It
//! reads nothing but directory entries; file contents and metadata formats
//! are left to presenters.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::browser::{BrowserId, BrowserLoadState, MediaBrowser};
use crate::content::{MediaItem, MediaKind, MediaNode};
use crate::error::BrowserError;
use crate::infrastructure::config::FolderSettings;
use crate::registry::BrowserDescriptor;

/// Lists media files of one kind below a set of directories.
pub struct FolderBrowser {
    id: BrowserId,
    label: String,
    kind: MediaKind,
    roots: Vec<PathBuf>,
    state: Mutex<BrowserLoadState>,
}

impl FolderBrowser {
    /// Creates a browser over `roots`, keeping the directories that exist.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Instantiation`] if none of the roots is a
    /// readable directory.
    pub fn new(id: BrowserId, kind: MediaKind, roots: Vec<PathBuf>) -> Result<Self, BrowserError> {
        let (usable, missing): (Vec<PathBuf>, Vec<PathBuf>) =
            roots.into_iter().partition(|root| root.is_dir());
        for root in &missing {
            warn!(browser_id = %id, root = %root.display(), "Skipping missing folder");
        }
        if usable.is_empty() {
            return Err(BrowserError::instantiation(&id, "no readable folder"));
        }
        Ok(Self {
            id,
            label: kind.group_name().to_string(),
            kind,
            roots: usable,
            state: Mutex::new(BrowserLoadState::Idle),
        })
    }

    /// Identity used for the folder browser of `kind`.
    #[must_use]
    pub fn id_for(kind: MediaKind) -> BrowserId {
        let name = match kind {
            MediaKind::Image => "folder.photos",
            MediaKind::Audio => "folder.music",
            MediaKind::Video => "folder.movies",
        };
        BrowserId::from_static(name)
    }

    /// Descriptor registering a folder browser for `kind` over `roots`.
    ///
    /// Roots are checked when the coordinator materializes the browser, so a
    /// missing directory shows up as an instantiation failure.
    #[must_use]
    pub fn descriptor(kind: MediaKind, roots: Vec<PathBuf>) -> BrowserDescriptor {
        BrowserDescriptor::new(Self::id_for(kind).as_str(), kind.group_name()).with_factory(
            move |id| {
                let browser = FolderBrowser::new(id.clone(), kind, roots.clone())?;
                Ok(Arc::new(browser) as Arc<dyn MediaBrowser>)
            },
        )
    }

    /// One descriptor per media kind.
    ///
    /// Configured roots are shared by every kind; without configured roots
    /// each kind uses its platform directory (pictures, music, videos).
    #[must_use]
    pub fn descriptors(settings: &FolderSettings) -> Vec<BrowserDescriptor> {
        [MediaKind::Image, MediaKind::Audio, MediaKind::Video]
            .into_iter()
            .map(|kind| {
                let roots = if settings.roots.is_empty() {
                    platform_dir(kind).into_iter().collect()
                } else {
                    settings.roots.clone()
                };
                Self::descriptor(kind, roots)
            })
            .collect()
    }

    /// Directories this browser scans.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan(kind: MediaKind, roots: &[PathBuf]) -> Result<MediaNode, BrowserError> {
        let mut tree = MediaNode::new(kind.group_name());
        for root in roots {
            // Roots may disappear between instantiation and population.
            fs::read_dir(root)?;
            tree.children.push(scan_root(kind, root));
        }
        Ok(tree)
    }
}

fn platform_dir(kind: MediaKind) -> Option<PathBuf> {
    match kind {
        MediaKind::Image => dirs::picture_dir(),
        MediaKind::Audio => dirs::audio_dir(),
        MediaKind::Video => dirs::video_dir(),
    }
}

fn scan_root(kind: MediaKind, root: &Path) -> MediaNode {
    let name = root
        .file_name()
        .and_then(|s| s.to_str())
        .map_or_else(|| root.display().to_string(), ToString::to_string);
    let mut node = MediaNode::new(name);

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MediaKind::from_extension)
            == Some(kind);
        if !matches {
            continue;
        }
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
        node.items.push(MediaItem {
            title,
            path: path.to_path_buf(),
            kind,
        });
    }
    node
}

#[async_trait]
impl MediaBrowser for FolderBrowser {
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
        *self.state.lock() = BrowserLoadState::Populating;

        let kind = self.kind;
        let roots = self.roots.clone();
        let result = tokio::task::spawn_blocking(move || FolderBrowser::scan(kind, &roots))
            .await
            .map_err(|e| BrowserError::Content {
                id: self.id.clone(),
                reason: format!("scan task failed: {e}"),
            })
            .and_then(|scanned| scanned);

        let state = if result.is_ok() {
            BrowserLoadState::Ready
        } else {
            BrowserLoadState::Failed
        };
        *self.state.lock() = state;

        match &result {
            Ok(tree) => {
                debug!(browser_id = %self.id, items = tree.item_count(), "Folder scan complete");
            }
            Err(e) => warn!(browser_id = %self.id, error = %e, "Folder scan failed"),
        }
        result
    }
}
