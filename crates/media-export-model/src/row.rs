use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::ids::MediaId;

/// Fixed column labels of the export, written before any data row.
pub const EXPORT_HEADER: [&str; 4] = ["ID", "Titre", "Nom du fichier", "URL"];

/// One line of the export: a projection of a surviving media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub id: MediaId,
    pub title: String,
    /// Final path segment of the stored file, never a path.
    pub filename: String,
    pub url: String,
}

impl ExportRow {
    /// Field values in column order.
    pub fn fields(&self) -> [Cow<'_, str>; 4] {
        [
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.filename.as_str()),
            Cow::Borrowed(self.url.as_str()),
        ]
    }
}
