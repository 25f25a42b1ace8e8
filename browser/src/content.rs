//! Content tree produced by media browsers.
//!
//! Browsers describe their libraries as a tree of named nodes, each holding
//! child nodes and leaf items. Presenters render the tree; this crate only
//! carries it.

use std::path::PathBuf;

use serde::Serialize;

/// Broad media category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Still images.
    Image,
    /// Music and other audio.
    Audio,
    /// Movies and other video.
    Video,
}

impl MediaKind {
    /// Guesses a kind from a file extension (case-insensitive).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "tif" | "tiff" | "heic" | "bmp" | "webp" | "raw"
            | "cr2" | "nef" => Some(Self::Image),
            "mp3" | "m4a" | "aac" | "flac" | "wav" | "aif" | "aiff" | "ogg" | "alac" => {
                Some(Self::Audio)
            }
            "mov" | "mp4" | "m4v" | "avi" | "mkv" | "mpg" | "mpeg" | "webm" => Some(Self::Video),
            _ => None,
        }
    }

    /// Display name used for grouping nodes.
    #[must_use]
    pub fn group_name(self) -> &'static str {
        match self {
            Self::Image => "Photos",
            Self::Audio => "Music",
            Self::Video => "Movies",
        }
    }
}

/// A single piece of media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Display title.
    pub title: String,
    /// Location of the media.
    pub path: PathBuf,
    /// Media category.
    pub kind: MediaKind,
}

/// A named node in a browser's content tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaNode {
    /// Display name.
    pub name: String,
    /// Nested nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MediaNode>,
    /// Leaf items directly under this node.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MediaItem>,
}

impl MediaNode {
    /// Creates an empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a child node.
    #[must_use]
    pub fn with_child(mut self, child: MediaNode) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a leaf item.
    #[must_use]
    pub fn with_item(mut self, item: MediaItem) -> Self {
        self.items.push(item);
        self
    }

    /// Number of items in this node and all descendants.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
            + self
                .children
                .iter()
                .map(MediaNode::item_count)
                .sum::<usize>()
    }
}
