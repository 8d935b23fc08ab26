//! Product record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use society_marketplace_core::{Category, Price, ProductId, UserId};

/// A catalog listing.
///
/// Created via add-product, mutated only by the owning seller via edit,
/// and deleted only by the owning seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation. Immutable.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    /// Syntactically valid URL; never verified reachable.
    pub image_url: String,
    /// The owning seller.
    pub seller_id: UserId,
    /// Denormalized copy of the seller's name, reissued on every write.
    /// There is no user-profile-edit operation, so it cannot drift today.
    pub seller_name: String,
    /// Creation timestamp. Immutable.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every edit.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product {
            id: ProductId::new("42"),
            title: "Desk Lamp".to_owned(),
            description: "Adjustable brass desk lamp.".to_owned(),
            price: Price::from_cents(2_000).unwrap(),
            category: Category::Furniture,
            image_url: "https://x/l.jpg".to_owned(),
            seller_id: UserId::new("s1"),
            seller_name: "Ann".to_owned(),
            created_at: "2024-02-15T10:30:00Z".parse().unwrap(),
            updated_at: "2024-02-15T10:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_stored_layout_is_camel_case() {
        let json = serde_json::to_value(lamp()).unwrap();
        assert_eq!(json["imageUrl"], "https://x/l.jpg");
        assert_eq!(json["sellerId"], "s1");
        assert_eq!(json["sellerName"], "Ann");
        assert_eq!(json["createdAt"], "2024-02-15T10:30:00Z");
        assert_eq!(json["updatedAt"], "2024-02-15T10:30:00Z");
        assert_eq!(json["price"], 20.0);
        assert_eq!(json["category"], "Furniture");
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let product = lamp();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
