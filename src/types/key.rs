//! Classification keys — where a selector lands in the index.

use serde::Serialize;

/// The index key derived from a selector's rightmost compound sub-selector.
///
/// Every comma-separated alternative of a registered selector produces exactly
/// one key. ID, class, and tag keys locate a narrow bucket; `Universal` is the
/// catch-all for selectors the classifier cannot narrow (attribute-only,
/// pseudo-only, `*`, empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SelectorKey {
    /// Keyed by an `#id` component found anywhere in the compound.
    Id(String),
    /// Keyed by the first `.class` component found in the compound.
    Class(String),
    /// Keyed by the leading tag name, stored upper-cased.
    Tag(String),
    /// No usable key; checked against every candidate element.
    Universal,
}

impl SelectorKey {
    /// Return the bucket kind name for this key.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Id(_) => "ID",
            Self::Class(_) => "CLASS",
            Self::Tag(_) => "TAG",
            Self::Universal => "UNIVERSAL",
        }
    }

    /// The key string, if this kind carries one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Id(k) | Self::Class(k) | Self::Tag(k) => Some(k),
            Self::Universal => None,
        }
    }
}

impl std::fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.key() {
            Some(k) => write!(f, "{}({})", self.kind_name(), k),
            None => write!(f, "{}", self.kind_name()),
        }
    }
}
