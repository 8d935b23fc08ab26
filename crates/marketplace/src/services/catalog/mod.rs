//! Catalog views and product operations.
//!
//! The view functions ([`filter_catalog`], [`liked_view`], [`my_listings`])
//! are pure derivations over a product list: no side effects, no storage.
//! [`CatalogService`] composes them with the store and adds the mutating
//! operations (add/edit/delete/like).

mod error;

pub use error::ProductError;

use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;

use society_marketplace_core::{Category, Price, ProductId, UserId};

use crate::models::{Product, User};
use crate::storage::LocalStore;

/// Minimum title length after trimming.
const MIN_TITLE_LENGTH: usize = 3;

/// Minimum description length after trimming.
const MIN_DESCRIPTION_LENGTH: usize = 10;

// =============================================================================
// Pure derivations
// =============================================================================

/// Filter a product list by free-text search and optional category.
///
/// A product is included iff the search term is empty or a
/// case-insensitive substring of its title or description, AND the
/// category is `None` or equals the product's category exactly. Matching
/// is plain substring - no tokenization, no fuzzing, no ranking; the
/// result keeps the input order.
#[must_use]
pub fn filter_catalog(
    products: &[Product],
    search_term: &str,
    category: Option<Category>,
) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            let matches_search = needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle);
            let matches_category = category.is_none_or(|c| p.category == c);
            matches_search && matches_category
        })
        .cloned()
        .collect()
}

/// The products whose ids appear in `liked_ids`, in catalog order.
///
/// Dangling ids - likes referencing a product that has since been deleted -
/// are silently skipped, never surfaced as an error. The liked-index is
/// written without a transaction against the catalog, so dangling ids are
/// an expected state.
#[must_use]
pub fn liked_view(all_products: &[Product], liked_ids: &[ProductId]) -> Vec<Product> {
    all_products
        .iter()
        .filter(|p| liked_ids.contains(&p.id))
        .cloned()
        .collect()
}

/// The products listed by `seller_id`, in catalog order.
#[must_use]
pub fn my_listings(all_products: &[Product], seller_id: &UserId) -> Vec<Product> {
    all_products
        .iter()
        .filter(|p| &p.seller_id == seller_id)
        .cloned()
        .collect()
}

// =============================================================================
// Draft validation
// =============================================================================

/// User-entered fields of a new or edited listing, before validation.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image_url: String,
}

/// A draft that passed validation.
struct ValidatedDraft {
    title: String,
    description: String,
    price: Price,
    category: Category,
    image_url: String,
}

impl ProductDraft {
    fn validate(self) -> Result<ValidatedDraft, ProductError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ProductError::EmptyTitle);
        }
        if title.len() < MIN_TITLE_LENGTH {
            return Err(ProductError::TitleTooShort {
                min: MIN_TITLE_LENGTH,
            });
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ProductError::EmptyDescription);
        }
        if description.len() < MIN_DESCRIPTION_LENGTH {
            return Err(ProductError::DescriptionTooShort {
                min: MIN_DESCRIPTION_LENGTH,
            });
        }

        let price = Price::new(self.price)?;

        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(ProductError::EmptyImageUrl);
        }
        // Syntax check only - the URL is never fetched.
        url::Url::parse(image_url)?;

        Ok(ValidatedDraft {
            title: title.to_owned(),
            description: description.to_owned(),
            price,
            category: self.category,
            image_url: image_url.to_owned(),
        })
    }
}

// =============================================================================
// Service
// =============================================================================

/// Catalog operations over the store.
///
/// Product saves suspend for the configured simulated latency, like the
/// auth operations; reads and like-toggles complete immediately.
pub struct CatalogService<'a> {
    store: &'a LocalStore,
    latency: Duration,
}

impl<'a> CatalogService<'a> {
    /// Create a catalog service over `store`.
    #[must_use]
    pub const fn new(store: &'a LocalStore, latency: Duration) -> Self {
        Self { store, latency }
    }

    /// The full catalog, in stored order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.store.products()
    }

    /// The catalog filtered by search term and optional category.
    #[must_use]
    pub fn search(&self, search_term: &str, category: Option<Category>) -> Vec<Product> {
        filter_catalog(&self.store.products(), search_term, category)
    }

    /// The current user's listings.
    #[must_use]
    pub fn my_products(&self, seller_id: &UserId) -> Vec<Product> {
        my_listings(&self.store.products(), seller_id)
    }

    /// Validate `draft` and append it to the catalog as a new listing
    /// owned by `seller`.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`ProductError`] if validation fails; the
    /// catalog is unchanged.
    pub async fn add_product(
        &self,
        draft: ProductDraft,
        seller: &User,
    ) -> Result<Product, ProductError> {
        let valid = draft.validate()?;

        tokio::time::sleep(self.latency).await;

        let now = Utc::now();
        let product = Product {
            id: ProductId::generate(),
            title: valid.title,
            description: valid.description,
            price: valid.price,
            category: valid.category,
            image_url: valid.image_url,
            seller_id: seller.id.clone(),
            seller_name: seller.name.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut products = self.store.products();
        products.push(product.clone());
        self.store.save_products(&products);
        tracing::info!(product_id = %product.id, seller_id = %seller.id, "listing added");
        Ok(product)
    }

    /// Apply `draft` to an existing listing.
    ///
    /// A missing id is a silent no-op (`Ok(None)`). On success the
    /// creation timestamp is preserved, `updated_at` is refreshed, and
    /// the seller name is reissued from `seller`.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`ProductError`] if validation fails, or
    /// [`ProductError::NotOwner`] if `seller` does not own the listing.
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: ProductDraft,
        seller: &User,
    ) -> Result<Option<Product>, ProductError> {
        let valid = draft.validate()?;

        tokio::time::sleep(self.latency).await;

        let mut products = self.store.products();
        let Some(existing) = products.iter_mut().find(|p| &p.id == id) else {
            tracing::warn!(product_id = %id, "edit of unknown listing ignored");
            return Ok(None);
        };
        if existing.seller_id != seller.id {
            return Err(ProductError::NotOwner);
        }

        existing.title = valid.title;
        existing.description = valid.description;
        existing.price = valid.price;
        existing.category = valid.category;
        existing.image_url = valid.image_url;
        existing.seller_name = seller.name.clone();
        existing.updated_at = Utc::now();
        let updated = existing.clone();

        self.store.save_products(&products);
        tracing::info!(product_id = %id, "listing updated");
        Ok(Some(updated))
    }

    /// Remove a listing. A missing id is a silent no-op (`Ok(false)`).
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::NotOwner`] if `seller` does not own the
    /// listing.
    pub fn delete_product(&self, id: &ProductId, seller: &User) -> Result<bool, ProductError> {
        let products = self.store.products();
        match products.iter().find(|p| &p.id == id) {
            None => {
                tracing::warn!(product_id = %id, "delete of unknown listing ignored");
                Ok(false)
            }
            Some(existing) if existing.seller_id != seller.id => Err(ProductError::NotOwner),
            Some(_) => {
                let remaining: Vec<Product> =
                    products.into_iter().filter(|p| &p.id != id).collect();
                self.store.save_products(&remaining);
                tracing::info!(product_id = %id, "listing deleted");
                Ok(true)
            }
        }
    }

    /// Toggle a like: add if absent, remove if present. Returns whether
    /// the product is liked afterwards.
    pub fn toggle_like(&self, user_id: &UserId, product_id: &ProductId) -> bool {
        let mut ids = self.store.liked_product_ids(user_id);
        let liked = if ids.contains(product_id) {
            ids.retain(|id| id != product_id);
            false
        } else {
            ids.push(product_id.clone());
            true
        };
        self.store.save_liked_product_ids(user_id, ids);
        liked
    }

    /// Whether `user_id` has liked `product_id`.
    #[must_use]
    pub fn is_liked(&self, user_id: &UserId, product_id: &ProductId) -> bool {
        self.store.liked_product_ids(user_id).contains(product_id)
    }

    /// The user's liked products, in catalog order, with dangling ids
    /// filtered out.
    #[must_use]
    pub fn liked_products(&self, user_id: &UserId) -> Vec<Product> {
        liked_view(
            &self.store.products(),
            &self.store.liked_product_ids(user_id),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use society_marketplace_core::Email;

    use super::*;

    fn seller(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            email: Email::parse(&format!("{id}@x.com")).unwrap(),
            name: name.to_owned(),
            created_at: Utc::now(),
        }
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_owned(),
            description: "A perfectly fine item in good shape.".to_owned(),
            price: Decimal::new(2_000, 2),
            category: Category::Furniture,
            image_url: "https://x/l.jpg".to_owned(),
        }
    }

    fn product(id: &str, title: &str, description: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            price: Price::from_cents(1_000).unwrap(),
            category,
            image_url: "https://x/p.jpg".to_owned(),
            seller_id: UserId::new("s1"),
            seller_name: "Ann".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Pure derivations
    // -------------------------------------------------------------------------

    #[test]
    fn test_filter_by_substring_of_title_or_description() {
        let catalog = vec![
            product("1", "MacBook Pro", "Laptop for developers", Category::Electronics),
            product("2", "Coffee Table", "Glass top, wooden legs", Category::Furniture),
            product("3", "Trek Bike", "A macbook-carrying basket included", Category::Sports),
        ];

        let hits = filter_catalog(&catalog, "macbook", None);
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_term_and_category_are_wildcards() {
        let catalog = vec![
            product("1", "Lamp", "Warm light for desks", Category::Furniture),
            product("2", "Bike", "21-speed, recently serviced", Category::Sports),
        ];
        assert_eq!(filter_catalog(&catalog, "", None).len(), 2);
    }

    #[test]
    fn test_category_must_match_exactly() {
        let catalog = vec![
            product("1", "Lamp", "Warm light for desks", Category::Furniture),
            product("2", "Bike", "21-speed, recently serviced", Category::Sports),
        ];

        let hits = filter_catalog(&catalog, "", Some(Category::Sports));
        assert_eq!(hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
        assert!(filter_catalog(&catalog, "", Some(Category::Books)).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = vec![
            product("1", "Desk Lamp", "Warm light", Category::Furniture),
            product("2", "Lava Lamp", "Electric novelty light", Category::Electronics),
        ];

        let hits = filter_catalog(&catalog, "lamp", Some(Category::Electronics));
        assert_eq!(hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_liked_view_skips_dangling_ids() {
        let catalog = vec![
            product("1", "Lamp", "Warm light for desks", Category::Furniture),
            product("2", "Bike", "21-speed, recently serviced", Category::Sports),
        ];
        let liked = vec![
            ProductId::new("2"),
            ProductId::new("99"), // deleted since it was liked
        ];

        let view = liked_view(&catalog, &liked);
        assert_eq!(view.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_my_listings_filters_by_seller() {
        let mut other = product("2", "Bike", "21-speed, recently serviced", Category::Sports);
        other.seller_id = UserId::new("s2");
        let catalog = vec![
            product("1", "Lamp", "Warm light for desks", Category::Furniture),
            other,
        ];

        let mine = my_listings(&catalog, &UserId::new("s1"));
        assert_eq!(mine.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["1"]);
        assert!(my_listings(&catalog, &UserId::new("s3")).is_empty());
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_draft_validation_rules() {
        let ok = draft("Lamp").validate();
        assert!(ok.is_ok());

        let blank_title = ProductDraft {
            title: "   ".to_owned(),
            ..draft("x")
        };
        assert!(matches!(
            blank_title.validate(),
            Err(ProductError::EmptyTitle)
        ));

        let short_title = draft("ab");
        assert!(matches!(
            short_title.validate(),
            Err(ProductError::TitleTooShort { min: 3 })
        ));

        let short_description = ProductDraft {
            description: "too short".to_owned(),
            ..draft("Lamp")
        };
        assert!(matches!(
            short_description.validate(),
            Err(ProductError::DescriptionTooShort { min: 10 })
        ));

        let free = ProductDraft {
            price: Decimal::ZERO,
            ..draft("Lamp")
        };
        assert!(matches!(free.validate(), Err(ProductError::InvalidPrice(_))));

        let bad_url = ProductDraft {
            image_url: "not a url".to_owned(),
            ..draft("Lamp")
        };
        assert!(matches!(
            bad_url.validate(),
            Err(ProductError::InvalidImageUrl(_))
        ));

        let no_url = ProductDraft {
            image_url: String::new(),
            ..draft("Lamp")
        };
        assert!(matches!(no_url.validate(), Err(ProductError::EmptyImageUrl)));
    }

    // -------------------------------------------------------------------------
    // Service operations
    // -------------------------------------------------------------------------

    fn service(store: &LocalStore) -> CatalogService<'_> {
        CatalogService::new(store, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_add_product_assigns_ownership() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");

        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();
        assert_eq!(lamp.seller_id, ann.id);
        assert_eq!(lamp.seller_name, "Ann");
        assert_eq!(lamp.created_at, lamp.updated_at);

        let mine = catalog.my_products(&ann.id);
        assert_eq!(mine.len(), 1);
        assert!(catalog.my_products(&UserId::new("s2")).is_empty());
    }

    #[tokio::test]
    async fn test_update_product_refreshes_updated_at_only() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");

        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();
        let updated = catalog
            .update_product(&lamp.id, draft("Brass Lamp"), &ann)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Brass Lamp");
        assert_eq!(updated.id, lamp.id);
        assert_eq!(updated.created_at, lamp.created_at);
        assert!(updated.updated_at >= lamp.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_silent_noop() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");

        let result = catalog
            .update_product(&ProductId::new("missing"), draft("Lamp"), &ann)
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(catalog.products().is_empty());
    }

    #[tokio::test]
    async fn test_non_owner_cannot_edit_or_delete() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");
        let bob = seller("s2", "Bob");

        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();

        let edit = catalog.update_product(&lamp.id, draft("Stolen"), &bob).await;
        assert!(matches!(edit, Err(ProductError::NotOwner)));

        let delete = catalog.delete_product(&lamp.id, &bob);
        assert!(matches!(delete, Err(ProductError::NotOwner)));

        assert_eq!(catalog.products().len(), 1);
        assert_eq!(
            catalog.products().first().map(|p| p.title.clone()),
            Some("Lamp".to_owned())
        );
    }

    #[tokio::test]
    async fn test_delete_product() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");

        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();
        assert!(catalog.delete_product(&lamp.id, &ann).unwrap());
        assert!(catalog.products().is_empty());

        // Deleting again is a silent no-op.
        assert!(!catalog.delete_product(&lamp.id, &ann).unwrap());
    }

    #[tokio::test]
    async fn test_toggle_like_roundtrip() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");
        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();

        assert!(catalog.toggle_like(&ann.id, &lamp.id));
        assert!(catalog.is_liked(&ann.id, &lamp.id));
        assert_eq!(store.liked_product_ids(&ann.id).len(), 1);

        assert!(!catalog.toggle_like(&ann.id, &lamp.id));
        assert!(!catalog.is_liked(&ann.id, &lamp.id));
        assert!(store.liked_product_ids(&ann.id).is_empty());
    }

    #[tokio::test]
    async fn test_liked_products_tolerate_deleted_listing() {
        let store = LocalStore::in_memory();
        let catalog = service(&store);
        let ann = seller("s1", "Ann");

        let lamp = catalog.add_product(draft("Lamp"), &ann).await.unwrap();
        let sofa = catalog.add_product(draft("Sofa"), &ann).await.unwrap();
        catalog.toggle_like(&ann.id, &lamp.id);
        catalog.toggle_like(&ann.id, &sofa.id);

        catalog.delete_product(&lamp.id, &ann).unwrap();

        let liked = catalog.liked_products(&ann.id);
        assert_eq!(liked.iter().map(|p| p.id.clone()).collect::<Vec<_>>(), vec![sofa.id]);
    }
}
