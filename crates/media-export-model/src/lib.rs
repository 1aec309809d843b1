//! Data model for the media CSV export.
//!
//! Every type here is a read-only snapshot taken once per export request.

pub mod category;
pub mod error;
pub mod exclusion;
pub mod ids;
pub mod media;
pub mod row;

pub use category::{Category, DEFAULT_CATEGORY_FALLBACK, DEFAULT_CATEGORY_SLUG};
pub use error::{ModelError, Result};
pub use exclusion::ExclusionSet;
pub use ids::{CategoryId, EntryId, MediaId};
pub use media::{MediaItem, MediaKind};
pub use row::{EXPORT_HEADER, ExportRow};
