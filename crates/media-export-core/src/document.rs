//! The downloadable export document and its response headers.

use chrono::NaiveDateTime;

/// Content type announced for the export.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const FILENAME_PREFIX: &str = "export-medias-";

/// Download name for an export generated at `generated_at` (local time).
///
/// Format: `export-medias-YYYY-MM-DD-HH-mm.csv`.
pub fn export_filename(generated_at: NaiveDateTime) -> String {
    format!(
        "{FILENAME_PREFIX}{}.csv",
        generated_at.format("%Y-%m-%d-%H-%M")
    )
}

/// A complete export ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Data rows, header excluded.
    pub row_count: usize,
}

impl ExportDocument {
    pub fn content_type(&self) -> &'static str {
        CSV_CONTENT_TYPE
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }

    /// Response headers in the order they are sent.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Type", self.content_type().to_string()),
            ("Content-Disposition", self.content_disposition()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(hour, minute, 59))
            .expect("valid timestamp")
    }

    #[test]
    fn filename_is_zero_padded_to_the_minute() {
        assert_eq!(export_filename(at(9, 5)), "export-medias-2024-03-07-09-05.csv");
        assert_eq!(export_filename(at(23, 59)), "export-medias-2024-03-07-23-59.csv");
    }

    #[test]
    fn headers_announce_download() {
        let document = ExportDocument {
            filename: export_filename(at(9, 5)),
            bytes: Vec::new(),
            row_count: 0,
        };
        let [content_type, disposition] = document.headers();
        assert_eq!(content_type, ("Content-Type", "text/csv; charset=utf-8".to_string()));
        assert_eq!(
            disposition,
            (
                "Content-Disposition",
                "attachment; filename=export-medias-2024-03-07-09-05.csv".to_string()
            )
        );
    }
}
