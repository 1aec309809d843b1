//! Mapping of surviving media items to export rows.

use media_export_model::{ExportRow, MediaItem};

/// Final segment of a stored file path.
///
/// Both `/` and `\` separate segments and trailing separators are ignored,
/// so the result never contains a directory separator.
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
}

/// Project one media item onto the export columns.
pub fn project(item: &MediaItem) -> ExportRow {
    ExportRow {
        id: item.id,
        title: item.title.clone(),
        filename: file_name(&item.file).to_string(),
        url: item.url.clone(),
    }
}
