use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use media_export_core::{
    ExportOptions, MediaRepository, resolve_default_category, run_export, stream_document,
    write_document,
};
use media_export_model::ExclusionSet;
use tracing::{debug, info, info_span};

use crate::cli::{CategoriesArgs, ExportArgs};
use crate::snapshot::load_snapshot;
use crate::summary::{apply_table_style, category_rows};
use crate::types::ExportResult;

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let loaded = load_snapshot(&args.snapshot)?;
    let options = args.default_category.apply(ExportOptions::default());
    let default_category = resolve_default_category(&loaded.repository, &options);
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Slug", "Parent", "Default"]);
    apply_table_style(&mut table);
    for row in category_rows(&loaded.repository.categories(), default_category) {
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}

pub fn run_export_command(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export_command", snapshot = %args.snapshot.display());
    let _guard = span.enter();

    let (excluded, ignored_values) = ExclusionSet::parse_lenient(&args.exclude);
    for value in &ignored_values {
        debug!(value = %value, "ignored exclusion value, not a category id");
    }

    let loaded = load_snapshot(&args.snapshot)?;
    let options = args
        .default_category
        .apply(ExportOptions::default().with_kind(args.kind.into()));

    let outcome = run_export(&loaded.repository, &excluded, &options).context("generate export")?;
    let document = outcome.document;

    let path = if args.stdout {
        stream_document(io::stdout().lock(), &document).context("stream export to stdout")?;
        None
    } else {
        let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let path = write_document(&dir, &document)
            .with_context(|| format!("write export to {}", dir.display()))?;
        info!(path = %path.display(), rows = document.row_count, "export saved");
        Some(path)
    };

    Ok(ExportResult {
        headers: document.headers().to_vec(),
        filename: document.filename,
        path,
        stats: outcome.stats,
        skipped_media: loaded.skipped_media,
        excluded_categories: excluded.iter().collect(),
        ignored_values,
        default_category: outcome.default_category,
    })
}
