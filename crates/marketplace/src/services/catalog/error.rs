//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when validating or applying product operations.
///
/// Field-level validation failures meant to be shown next to the offending
/// field; none is fatal.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The title is blank.
    #[error("title is required")]
    EmptyTitle,

    /// The title is shorter than the minimum.
    #[error("title must be at least {min} characters")]
    TitleTooShort {
        /// Minimum length after trimming.
        min: usize,
    },

    /// The description is blank.
    #[error("description is required")]
    EmptyDescription,

    /// The description is shorter than the minimum.
    #[error("description must be at least {min} characters")]
    DescriptionTooShort {
        /// Minimum length after trimming.
        min: usize,
    },

    /// The price is zero or negative.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] society_marketplace_core::PriceError),

    /// The image URL is blank.
    #[error("image URL is required")]
    EmptyImageUrl,

    /// The image URL is not syntactically valid.
    #[error("invalid image URL: {0}")]
    InvalidImageUrl(#[from] url::ParseError),

    /// An edit or delete was attempted by someone other than the owning
    /// seller.
    #[error("only the owning seller can modify a listing")]
    NotOwner,
}
