//! Product categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// The fixed set of catalog categories.
///
/// Serialized using the display name, which is also the exact string the
/// product filter compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Kitchen")]
    HomeAndKitchen,
    Sports,
    Books,
    Shoes,
    Hats,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Electronics,
        Self::Clothing,
        Self::HomeAndKitchen,
        Self::Sports,
        Self::Books,
        Self::Shoes,
        Self::Hats,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::HomeAndKitchen => "Home & Kitchen",
            Self::Sports => "Sports",
            Self::Books => "Books",
            Self::Shoes => "Shoes",
            Self::Hats => "Hats",
        }
    }

    /// Icon shown next to the category name in the filter bar.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Electronics => "📱",
            Self::Clothing => "👕",
            Self::HomeAndKitchen => "🏠",
            Self::Sports => "⚽",
            Self::Books => "📚",
            Self::Shoes => "👟",
            Self::Hats => "🧢",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}
