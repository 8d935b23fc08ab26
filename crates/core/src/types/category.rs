//! The fixed category set for listings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a label does not name a known category.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// A listing category.
///
/// Closed set: every product belongs to exactly one of these. Serialized
/// with the display labels used in the stored catalog (`"Home & Garden"`,
/// not `HomeAndGarden`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Books,
    Sports,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Automotive,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Furniture,
        Self::Clothing,
        Self::Books,
        Self::Sports,
        Self::HomeAndGarden,
        Self::Automotive,
        Self::Other,
    ];

    /// The display label, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::Sports => "Sports",
            Self::HomeAndGarden => "Home & Garden",
            Self::Automotive => "Automotive",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
