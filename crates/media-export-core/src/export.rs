//! One export request from candidate listing to finished document.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use media_export_model::{CategoryId, ExclusionSet, MediaItem};
use tracing::{debug, info, info_span};

use crate::document::{ExportDocument, export_filename};
use crate::emitter::CsvEmitter;
use crate::error::Result;
use crate::options::ExportOptions;
use crate::projection::project;
use crate::repository::MediaRepository;
use crate::resolver::{ExclusionReason, ResolverContext};

/// Counters collected while exporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub candidates: usize,
    pub excluded_by_own: usize,
    pub excluded_by_parent: usize,
    /// Listed ids the repository could not describe; exported with empty fields.
    pub missing_records: usize,
    pub written: usize,
}

impl ExportStats {
    pub fn excluded(&self) -> usize {
        self.excluded_by_own + self.excluded_by_parent
    }
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub document: ExportDocument,
    pub stats: ExportStats,
    pub default_category: CategoryId,
}

/// Default category id: slug lookup, else the configured fallback.
pub fn resolve_default_category<R>(repository: &R, options: &ExportOptions) -> CategoryId
where
    R: MediaRepository + ?Sized,
{
    repository
        .category_id_by_slug(&options.default_slug)
        .unwrap_or_else(|| {
            debug!(
                slug = %options.default_slug,
                fallback = %options.fallback_default_category,
                "default category not found, using fallback id"
            );
            options.fallback_default_category
        })
}

/// Run an export stamped with the current local time.
pub fn run_export<R>(
    repository: &R,
    excluded: &ExclusionSet,
    options: &ExportOptions,
) -> Result<ExportOutcome>
where
    R: MediaRepository + ?Sized,
{
    run_export_at(repository, excluded, options, Local::now().naive_local())
}

/// Run an export stamped with `generated_at`.
pub fn run_export_at<R>(
    repository: &R,
    excluded: &ExclusionSet,
    options: &ExportOptions,
    generated_at: NaiveDateTime,
) -> Result<ExportOutcome>
where
    R: MediaRepository + ?Sized,
{
    let span = info_span!("export", excluded = excluded.len(), kind = ?options.kind);
    let _guard = span.enter();
    let start = Instant::now();

    let default_category = resolve_default_category(repository, options);
    let context = ResolverContext::new(excluded.clone(), default_category);
    let candidates = repository.media_ids(options.kind);
    let mut stats = ExportStats {
        candidates: candidates.len(),
        ..ExportStats::default()
    };

    let mut emitter = CsvEmitter::new(Vec::new())?;
    for id in candidates {
        let item = repository.media_item(id).unwrap_or_else(|| {
            debug!(media_id = %id, "media record missing, exporting empty fields");
            stats.missing_records += 1;
            MediaItem::placeholder(id)
        });
        let own = repository.media_categories(id);
        let decision =
            context.decide_with(&item, &own, |parent| repository.entry_categories(parent));
        match decision.reason() {
            Some(ExclusionReason::OwnCategories) => {
                stats.excluded_by_own += 1;
                debug!(media_id = %id, "excluded by own categories");
            }
            Some(ExclusionReason::ParentEntry(parent)) => {
                stats.excluded_by_parent += 1;
                debug!(media_id = %id, parent_id = %parent, "excluded by parent entry");
            }
            None => emitter.write_row(&project(&item))?,
        }
    }
    stats.written = emitter.rows();
    let bytes = emitter.finish()?;

    let document = ExportDocument {
        filename: export_filename(generated_at),
        bytes,
        row_count: stats.written,
    };
    info!(
        candidates = stats.candidates,
        excluded = stats.excluded(),
        written = stats.written,
        default_category = %default_category,
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(ExportOutcome {
        document,
        stats,
        default_category,
    })
}
