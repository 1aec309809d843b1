//! CSV emitter.
//!
//! Writes a UTF-8 byte-order mark, the fixed header and one semicolon
//! separated record per row, in the order given.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use media_export_model::{EXPORT_HEADER, ExportRow};

use crate::error::{ExportError, Result};

/// Byte-order mark prepended so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Field delimiter. Comma is the decimal separator in the target locale.
pub const DELIMITER: u8 = b';';

/// Streaming CSV writer for export rows.
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvEmitter<W> {
    /// Write the byte-order mark and the header to `sink`.
    pub fn new(mut sink: W) -> Result<Self> {
        sink.write_all(UTF8_BOM)
            .map_err(|source| ExportError::Sink { source })?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);
        writer.write_record(EXPORT_HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &ExportRow) -> Result<()> {
        let [id, title, filename, url] = row.fields();
        self.writer
            .write_record([id.as_ref(), title.as_ref(), filename.as_ref(), url.as_ref()])?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered records and hand the sink back.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|error| ExportError::Sink {
                source: error.into_error(),
            })
    }
}

/// Emit `rows` into `sink`, returning the sink once everything is flushed.
pub fn emit_to<W: Write>(sink: W, rows: &[ExportRow]) -> Result<W> {
    let mut emitter = CsvEmitter::new(sink)?;
    for row in rows {
        emitter.write_row(row)?;
    }
    emitter.finish()
}

/// Emit `rows` into an in-memory document.
pub fn emit(rows: &[ExportRow]) -> Result<Vec<u8>> {
    emit_to(Vec::new(), rows)
}
