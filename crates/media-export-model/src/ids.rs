#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }

            /// Parse an identifier submitted as text.
            ///
            /// Surrounding whitespace is ignored. Zero, negative, non-numeric
            /// and out-of-range values are rejected.
            pub fn parse(value: &str) -> Result<Self, ModelError> {
                match value.trim().parse::<u64>() {
                    Ok(id) if id > 0 => Ok(Self(id)),
                    _ => Err(ModelError::InvalidId {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of an uploaded media attachment.
    MediaId,
    "media id"
);

numeric_id!(
    /// Identifier of a publishable content entry (the parent of attachments).
    EntryId,
    "entry id"
);

numeric_id!(
    /// Identifier of a taxonomy category.
    CategoryId,
    "category id"
);
