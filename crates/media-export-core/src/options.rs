use media_export_model::{CategoryId, DEFAULT_CATEGORY_FALLBACK, DEFAULT_CATEGORY_SLUG, MediaKind};

/// Settings resolved by the host before an export runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Attachments listed as candidates.
    pub kind: MediaKind,
    /// Slug used to look up the default category.
    pub default_slug: String,
    /// Default category id when the slug lookup fails.
    pub fallback_default_category: CategoryId,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            kind: MediaKind::Any,
            default_slug: DEFAULT_CATEGORY_SLUG.to_string(),
            fallback_default_category: DEFAULT_CATEGORY_FALLBACK,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_default_slug(mut self, slug: impl Into<String>) -> Self {
        self.default_slug = slug.into();
        self
    }

    #[must_use]
    pub fn with_fallback_default_category(mut self, id: CategoryId) -> Self {
        self.fallback_default_category = id;
        self
    }
}
