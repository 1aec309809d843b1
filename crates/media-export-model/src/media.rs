use serde::{Deserialize, Serialize};

use crate::ids::{EntryId, MediaId};

/// Family of attachments listed for an export, matched on the MIME type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Every attachment regardless of type.
    #[default]
    Any,
    Image,
    Video,
    Audio,
    /// `application/*` and `text/*` uploads.
    Document,
}

impl MediaKind {
    pub fn matches(self, mime_type: &str) -> bool {
        let family = mime_type
            .split_once('/')
            .map_or(mime_type, |(family, _)| family)
            .trim()
            .to_ascii_lowercase();
        match self {
            Self::Any => true,
            Self::Image => family == "image",
            Self::Video => family == "video",
            Self::Audio => family == "audio",
            Self::Document => family == "application" || family == "text",
        }
    }
}

/// Snapshot of one uploaded media attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    #[serde(default)]
    pub title: String,
    /// Stored file path, relative to the upload root or absolute.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub parent: Option<EntryId>,
}

impl MediaItem {
    pub fn new(id: MediaId, file: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: String::new(),
            file: file.into(),
            url: url.into(),
            mime_type: String::new(),
            parent: None,
        }
    }

    /// Record used when the repository lists an id it cannot describe.
    pub fn placeholder(id: MediaId) -> Self {
        Self::new(id, "", "")
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: EntryId) -> Self {
        self.parent = Some(parent);
        self
    }
}
