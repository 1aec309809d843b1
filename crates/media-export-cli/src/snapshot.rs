//! Repository snapshot files.
//!
//! A snapshot is a JSON dump of the content repository: categories, content
//! entries with their categories, and media attachments. It stands in for the
//! host platform's database.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use media_export_core::InMemoryRepository;
use media_export_model::{Category, CategoryId, EntryId, MediaItem};
use serde::Deserialize;
use tracing::debug;

use crate::logging::redact_value;

/// Status carried by attachments that belong to the media library.
pub const ATTACHMENT_STATUS: &str = "inherit";

#[derive(Debug, Default, Deserialize)]
pub struct RepositorySnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    pub id: EntryId,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, Deserialize)]
pub struct MediaRecord {
    #[serde(flatten)]
    pub item: MediaItem,
    #[serde(default = "attachment_status")]
    pub status: String,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

fn attachment_status() -> String {
    ATTACHMENT_STATUS.to_string()
}

/// Repository built from a snapshot, with the number of media left out.
#[derive(Debug)]
pub struct LoadedSnapshot {
    pub repository: InMemoryRepository,
    pub skipped_media: usize,
}

impl RepositorySnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse repository snapshot")
    }

    /// Only media with the attachment status become export candidates.
    pub fn into_repository(self) -> LoadedSnapshot {
        let mut repository = InMemoryRepository::new();
        for category in self.categories {
            repository.insert_category(category);
        }
        for entry in self.entries {
            repository.insert_entry(entry.id, entry.categories);
        }
        let mut skipped_media = 0;
        for record in self.media {
            if record.status != ATTACHMENT_STATUS {
                debug!(
                    media_id = %record.item.id,
                    title = redact_value(&record.item.title),
                    status = %record.status,
                    "media skipped by status"
                );
                skipped_media += 1;
                continue;
            }
            repository.insert_media(record.item, record.categories);
        }
        LoadedSnapshot {
            repository,
            skipped_media,
        }
    }
}

/// Read and convert the snapshot at `path`.
pub fn load_snapshot(path: &Path) -> Result<LoadedSnapshot> {
    let file = File::open(path).with_context(|| format!("open snapshot {}", path.display()))?;
    let snapshot: RepositorySnapshot = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    Ok(snapshot.into_repository())
}
