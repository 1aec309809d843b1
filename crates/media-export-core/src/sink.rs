//! Delivery of a finished document to a file or an output stream.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::ExportDocument;
use crate::error::{ExportError, Result};

/// Write `document` into `dir` under its own filename.
///
/// Bytes go to a `.partial` temp file that is synced and then renamed into
/// place. On any failure the temp file is removed, so a file carrying the
/// final name is always complete.
pub fn write_document(dir: &Path, document: &ExportDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let target_path = dir.join(&document.filename);
    let temp_path = dir.join(format!("{}.partial", document.filename));

    let result = write_synced(&temp_path, &document.bytes).and_then(|()| {
        fs::rename(&temp_path, &target_path).map_err(|e| ExportError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: target_path.clone(),
            source: e,
        })
    });

    if result.is_err()
        && temp_path.exists()
        && let Err(error) = fs::remove_file(&temp_path)
    {
        tracing::warn!(
            path = %temp_path.display(),
            %error,
            "failed to remove partial export"
        );
    }
    result?;

    tracing::info!(path = %target_path.display(), bytes = document.bytes.len(), "export written");
    Ok(target_path)
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ExportError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| ExportError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| ExportError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Stream `document` to an already open sink such as standard output.
pub fn stream_document<W: Write>(mut sink: W, document: &ExportDocument) -> Result<()> {
    sink.write_all(&document.bytes)
        .and_then(|()| sink.flush())
        .map_err(|source| ExportError::Sink { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn document() -> ExportDocument {
        ExportDocument {
            filename: "export-medias-2024-03-07-09-05.csv".to_string(),
            bytes: b"\xEF\xBB\xBFID;Titre;Nom du fichier;URL\n".to_vec(),
            row_count: 0,
        }
    }

    #[test]
    fn writes_complete_file_without_leftovers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_document(dir.path(), &document()).expect("write");
        assert_eq!(path, dir.path().join("export-medias-2024-03-07-09-05.csv"));
        assert_eq!(fs::read(&path).expect("read"), document().bytes);
        let names: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("exports/2024");
        let path = write_document(&nested, &document()).expect("write");
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn failed_rename_leaves_no_partial_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory in the way of the target makes the rename fail.
        fs::create_dir_all(dir.path().join(&document().filename).join("occupied"))
            .expect("blocker");
        let error = write_document(dir.path(), &document()).unwrap_err();
        assert!(matches!(error, ExportError::AtomicWriteFailed { .. }));
        assert!(
            !dir.path()
                .join(format!("{}.partial", document().filename))
                .exists()
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stream_failure_is_reported() {
        let error = stream_document(BrokenPipe, &document()).unwrap_err();
        assert!(matches!(error, ExportError::Sink { .. }));
    }

    #[test]
    fn stream_copies_bytes() {
        let mut out = Vec::new();
        stream_document(&mut out, &document()).expect("stream");
        assert_eq!(out, document().bytes);
    }
}
