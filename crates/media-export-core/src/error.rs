//! Error types for export emission.
//!
//! Deciding whether an item is excluded cannot fail; only writing the
//! document can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting or delivering an export document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("failed to write CSV record: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// The output sink could not be written or flushed.
    #[error("failed to write export to output stream: {source}")]
    Sink {
        #[source]
        source: std::io::Error,
    },

    /// File I/O error while delivering the document to disk.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The completed temp file could not be moved into place.
    #[error("failed to move {temp_path} to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
