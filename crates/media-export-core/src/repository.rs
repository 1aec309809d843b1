//! Read access to the content repository that hosts the media library.

use std::collections::HashMap;

use media_export_model::{Category, CategoryId, EntryId, MediaId, MediaItem, MediaKind};

/// Queries the export needs from the host content platform.
///
/// Lookups never fail: absent data is reported as an empty list or `None`.
pub trait MediaRepository {
    /// Identifiers of every attachment of `kind`, in listing order.
    fn media_ids(&self, kind: MediaKind) -> Vec<MediaId>;

    /// Title, stored path, URL and parent of one attachment.
    fn media_item(&self, id: MediaId) -> Option<MediaItem>;

    /// Categories attached directly to a media item.
    fn media_categories(&self, id: MediaId) -> Vec<CategoryId>;

    /// Categories of a content entry.
    fn entry_categories(&self, id: EntryId) -> Vec<CategoryId>;

    fn category_id_by_slug(&self, slug: &str) -> Option<CategoryId>;

    /// Every category, including ones no media uses.
    fn categories(&self) -> Vec<Category>;
}

/// Repository held entirely in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    categories: Vec<Category>,
    media: Vec<MediaItem>,
    media_index: HashMap<MediaId, usize>,
    media_categories: HashMap<MediaId, Vec<CategoryId>>,
    entry_categories: HashMap<EntryId, Vec<CategoryId>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Add a media item; a later item with the same id replaces the earlier
    /// one in place.
    pub fn insert_media(&mut self, item: MediaItem, categories: Vec<CategoryId>) {
        let id = item.id;
        match self.media_index.get(&id) {
            Some(&index) => self.media[index] = item,
            None => {
                self.media_index.insert(id, self.media.len());
                self.media.push(item);
            }
        }
        self.media_categories.insert(id, categories);
    }

    pub fn insert_entry(&mut self, id: EntryId, categories: Vec<CategoryId>) {
        self.entry_categories.insert(id, categories);
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.insert_category(category);
        self
    }

    #[must_use]
    pub fn with_media(mut self, item: MediaItem, categories: Vec<CategoryId>) -> Self {
        self.insert_media(item, categories);
        self
    }

    #[must_use]
    pub fn with_entry(mut self, id: EntryId, categories: Vec<CategoryId>) -> Self {
        self.insert_entry(id, categories);
        self
    }

    pub fn media_count(&self) -> usize {
        self.media.len()
    }
}

impl MediaRepository for InMemoryRepository {
    fn media_ids(&self, kind: MediaKind) -> Vec<MediaId> {
        self.media
            .iter()
            .filter(|item| kind.matches(&item.mime_type))
            .map(|item| item.id)
            .collect()
    }

    fn media_item(&self, id: MediaId) -> Option<MediaItem> {
        self.media_index
            .get(&id)
            .and_then(|&index| self.media.get(index))
            .cloned()
    }

    fn media_categories(&self, id: MediaId) -> Vec<CategoryId> {
        self.media_categories.get(&id).cloned().unwrap_or_default()
    }

    fn entry_categories(&self, id: EntryId) -> Vec<CategoryId> {
        self.entry_categories.get(&id).cloned().unwrap_or_default()
    }

    fn category_id_by_slug(&self, slug: &str) -> Option<CategoryId> {
        self.categories
            .iter()
            .find(|category| category.slug == slug)
            .map(|category| category.id)
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}
