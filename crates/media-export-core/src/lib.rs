//! Media CSV export core.
//!
//! Decides which media items survive an administrator's category exclusion
//! and serializes the survivors as a semicolon separated, BOM-prefixed CSV
//! document.
//!
//! # Example
//!
//! ```ignore
//! use media_export_core::{ExportOptions, InMemoryRepository, run_export};
//! use media_export_model::ExclusionSet;
//!
//! let repository = InMemoryRepository::new();
//! let (excluded, _dropped) = ExclusionSet::parse_lenient(["4", "7"]);
//! let outcome = run_export(&repository, &excluded, &ExportOptions::default())?;
//! ```

pub mod document;
pub mod emitter;
pub mod error;
pub mod export;
pub mod options;
pub mod projection;
pub mod repository;
pub mod resolver;
pub mod sink;

pub use document::{CSV_CONTENT_TYPE, ExportDocument, export_filename};
pub use emitter::{CsvEmitter, DELIMITER, UTF8_BOM, emit, emit_to};
pub use error::{ExportError, Result};
pub use export::{ExportOutcome, ExportStats, resolve_default_category, run_export, run_export_at};
pub use options::ExportOptions;
pub use projection::{file_name, project};
pub use repository::{InMemoryRepository, MediaRepository};
pub use resolver::{
    CategoryShape, Decision, ExclusionReason, Outcome, ResolverContext, is_excluded,
    own_category_outcome, parent_category_outcome,
};
pub use sink::{stream_document, write_document};
