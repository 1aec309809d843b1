//! Administrator-chosen set of excluded categories.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// Categories whose media must be left out of one export.
///
/// Set semantics: duplicates collapse and iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet(BTreeSet<CategoryId>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw form values.
    ///
    /// Each value is coerced to a category id; values that are not positive
    /// integers are returned separately instead of failing the request.
    pub fn parse_lenient<I, S>(values: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        let mut dropped = Vec::new();
        for value in values {
            let value = value.as_ref();
            match CategoryId::parse(value) {
                Ok(id) => {
                    set.insert(id);
                }
                Err(_) => dropped.push(value.to_string()),
            }
        }
        (Self(set), dropped)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.0.contains(&id)
    }

    /// True when any of `categories` is in the set.
    pub fn intersects<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a CategoryId>,
    {
        categories.into_iter().any(|id| self.0.contains(id))
    }

    /// Copy of the set with `id` removed.
    #[must_use]
    pub fn without(&self, id: CategoryId) -> Self {
        let mut set = self.0.clone();
        set.remove(&id);
        Self(set)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CategoryId> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = CategoryId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[CategoryId; N]> for ExclusionSet {
    fn from(ids: [CategoryId; N]) -> Self {
        ids.into_iter().collect()
    }
}
