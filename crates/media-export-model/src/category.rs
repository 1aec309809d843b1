use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// Slug of the implicit bucket assigned when no category was chosen.
pub const DEFAULT_CATEGORY_SLUG: &str = "uncategorized";

/// Identifier assumed for the default category when the slug lookup fails.
pub const DEFAULT_CATEGORY_FALLBACK: CategoryId = CategoryId::new(1);

/// A taxonomy term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Parent term, `None` for top-level categories.
    #[serde(default)]
    pub parent: Option<CategoryId>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: CategoryId) -> Self {
        self.parent = Some(parent);
        self
    }
}
