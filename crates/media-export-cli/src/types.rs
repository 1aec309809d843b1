use std::path::PathBuf;

use media_export_core::ExportStats;
use media_export_model::CategoryId;

#[derive(Debug)]
pub struct ExportResult {
    pub filename: String,
    /// Written file, `None` when streamed to standard output.
    pub path: Option<PathBuf>,
    pub headers: Vec<(&'static str, String)>,
    pub stats: ExportStats,
    pub skipped_media: usize,
    pub excluded_categories: Vec<CategoryId>,
    /// Exclusion values that were not category ids; never shown to the user.
    pub ignored_values: Vec<String>,
    pub default_category: CategoryId,
}
