//! Membership resolution: is a media item excluded from the export?
//!
//! The decision is a pure function of the item's own categories, its parent
//! entry's categories and the exclusion set. The default ("uncategorized")
//! category is treated asymmetrically when it is itself excluded:
//!
//! | default excluded | own categories        | outcome                               |
//! |------------------|-----------------------|---------------------------------------|
//! | no               | any                   | excluded iff they meet the set        |
//! | yes              | empty                 | included                              |
//! | yes              | only the default      | included                              |
//! | yes              | default + others      | excluded                              |
//! | yes              | others only           | excluded iff they meet set \ default  |
//!
//! Parent categories always use plain intersection.

use std::collections::BTreeSet;

use media_export_model::{CategoryId, EntryId, ExclusionSet, MediaItem};

/// Result of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Excluded,
    Included,
}

impl Outcome {
    fn when(excluded: bool) -> Self {
        if excluded {
            Self::Excluded
        } else {
            Self::Included
        }
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded)
    }
}

/// Classification of an item's own categories relative to the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryShape {
    Empty,
    DefaultOnly,
    DefaultAndOthers,
    OthersOnly,
}

impl CategoryShape {
    /// Duplicated ids count once.
    pub fn classify(categories: &[CategoryId], default_category: CategoryId) -> Self {
        let distinct: BTreeSet<CategoryId> = categories.iter().copied().collect();
        let has_default = distinct.contains(&default_category);
        match (distinct.len(), has_default) {
            (0, _) => Self::Empty,
            (1, true) => Self::DefaultOnly,
            (_, true) => Self::DefaultAndOthers,
            (_, false) => Self::OthersOnly,
        }
    }
}

/// Which rule removed an item from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    OwnCategories,
    ParentEntry(EntryId),
}

/// Final verdict for one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    reason: Option<ExclusionReason>,
}

impl Decision {
    pub const INCLUDED: Self = Self { reason: None };

    pub fn excluded(reason: ExclusionReason) -> Self {
        Self {
            reason: Some(reason),
        }
    }

    pub fn is_excluded(self) -> bool {
        self.reason.is_some()
    }

    pub fn reason(self) -> Option<ExclusionReason> {
        self.reason
    }
}

/// Rule applied to an item's own categories.
pub fn own_category_outcome(
    categories: &[CategoryId],
    excluded: &ExclusionSet,
    default_category: CategoryId,
) -> Outcome {
    let shape = CategoryShape::classify(categories, default_category);
    match (excluded.contains(default_category), shape) {
        (false, _) => Outcome::when(excluded.intersects(categories)),
        (true, CategoryShape::Empty | CategoryShape::DefaultOnly) => Outcome::Included,
        (true, CategoryShape::DefaultAndOthers) => Outcome::Excluded,
        (true, CategoryShape::OthersOnly) => {
            Outcome::when(excluded.without(default_category).intersects(categories))
        }
    }
}

/// Rule applied to the parent entry's categories: plain intersection.
pub fn parent_category_outcome(categories: &[CategoryId], excluded: &ExclusionSet) -> Outcome {
    Outcome::when(excluded.intersects(categories))
}

/// Per-request inputs shared by every decision of one export.
#[derive(Debug, Clone)]
pub struct ResolverContext {
    excluded: ExclusionSet,
    default_category: CategoryId,
}

impl ResolverContext {
    pub fn new(excluded: ExclusionSet, default_category: CategoryId) -> Self {
        Self {
            excluded,
            default_category,
        }
    }

    /// Decide with the parent's categories already fetched.
    pub fn decide(
        &self,
        item: &MediaItem,
        item_categories: &[CategoryId],
        parent_categories: &[CategoryId],
    ) -> Decision {
        self.decide_with(item, item_categories, |_| parent_categories.to_vec())
    }

    /// Decide, fetching the parent's categories only when the own-category
    /// rule kept the item.
    pub fn decide_with<F>(
        &self,
        item: &MediaItem,
        item_categories: &[CategoryId],
        parent_categories: F,
    ) -> Decision
    where
        F: FnOnce(EntryId) -> Vec<CategoryId>,
    {
        if own_category_outcome(item_categories, &self.excluded, self.default_category)
            .is_excluded()
        {
            return Decision::excluded(ExclusionReason::OwnCategories);
        }
        let Some(parent) = item.parent else {
            return Decision::INCLUDED;
        };
        let categories = parent_categories(parent);
        match parent_category_outcome(&categories, &self.excluded) {
            Outcome::Excluded => Decision::excluded(ExclusionReason::ParentEntry(parent)),
            Outcome::Included => Decision::INCLUDED,
        }
    }
}

/// Whether `item` is left out of the export.
pub fn is_excluded(
    item: &MediaItem,
    item_categories: &[CategoryId],
    parent_categories: &[CategoryId],
    excluded: &ExclusionSet,
    default_category_id: CategoryId,
) -> bool {
    ResolverContext::new(excluded.clone(), default_category_id)
        .decide(item, item_categories, parent_categories)
        .is_excluded()
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_export_model::MediaId;

    const DEFAULT: CategoryId = CategoryId::new(1);
    const ANIMALS: CategoryId = CategoryId::new(4);
    const FOOD: CategoryId = CategoryId::new(5);

    fn item() -> MediaItem {
        MediaItem::new(MediaId::new(100), "2024/05/chat.png", "https://example.org/chat.png")
    }

    #[test]
    fn classify_shapes() {
        assert_eq!(CategoryShape::classify(&[], DEFAULT), CategoryShape::Empty);
        assert_eq!(
            CategoryShape::classify(&[DEFAULT], DEFAULT),
            CategoryShape::DefaultOnly
        );
        assert_eq!(
            CategoryShape::classify(&[DEFAULT, DEFAULT], DEFAULT),
            CategoryShape::DefaultOnly
        );
        assert_eq!(
            CategoryShape::classify(&[FOOD, DEFAULT], DEFAULT),
            CategoryShape::DefaultAndOthers
        );
        assert_eq!(
            CategoryShape::classify(&[FOOD, ANIMALS], DEFAULT),
            CategoryShape::OthersOnly
        );
    }

    #[test]
    fn plain_rule_when_default_not_excluded() {
        let excluded = ExclusionSet::from([ANIMALS]);
        assert_eq!(
            own_category_outcome(&[ANIMALS, DEFAULT], &excluded, DEFAULT),
            Outcome::Excluded
        );
        assert_eq!(
            own_category_outcome(&[DEFAULT], &excluded, DEFAULT),
            Outcome::Included
        );
        assert_eq!(own_category_outcome(&[], &excluded, DEFAULT), Outcome::Included);
    }

    #[test]
    fn default_excluded_table() {
        let excluded = ExclusionSet::from([DEFAULT, ANIMALS]);
        assert_eq!(own_category_outcome(&[], &excluded, DEFAULT), Outcome::Included);
        assert_eq!(
            own_category_outcome(&[DEFAULT], &excluded, DEFAULT),
            Outcome::Included
        );
        assert_eq!(
            own_category_outcome(&[DEFAULT, FOOD], &excluded, DEFAULT),
            Outcome::Excluded
        );
        assert_eq!(
            own_category_outcome(&[ANIMALS], &excluded, DEFAULT),
            Outcome::Excluded
        );
        assert_eq!(
            own_category_outcome(&[FOOD], &excluded, DEFAULT),
            Outcome::Included
        );
    }

    #[test]
    fn parent_is_not_fetched_when_own_rule_excludes() {
        let context = ResolverContext::new(ExclusionSet::from([ANIMALS]), DEFAULT);
        let item = item().with_parent(EntryId::new(10));
        let decision = context.decide_with(&item, &[ANIMALS], |_| {
            panic!("parent categories must not be fetched")
        });
        assert_eq!(decision.reason(), Some(ExclusionReason::OwnCategories));
    }

    #[test]
    fn parent_categories_ignored_without_parent() {
        let excluded = ExclusionSet::from([ANIMALS]);
        assert!(!is_excluded(&item(), &[], &[ANIMALS], &excluded, DEFAULT));
    }

    #[test]
    fn parent_reason_names_entry() {
        let context = ResolverContext::new(ExclusionSet::from([DEFAULT]), DEFAULT);
        let item = item().with_parent(EntryId::new(10));
        let decision = context.decide(&item, &[DEFAULT], &[DEFAULT]);
        assert_eq!(
            decision.reason(),
            Some(ExclusionReason::ParentEntry(EntryId::new(10)))
        );
        assert!(decision.is_excluded());
    }
}
