//! Demo-data bootstrap.
//!
//! On first run the store is empty; [`initialize`] populates the three
//! seedable collections with a fixed demo dataset. Each collection is
//! checked independently at the raw-key level, so a collection a user has
//! explicitly emptied stays empty - seeding never overwrites anything
//! that was ever written.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use society_marketplace_core::{Category, Email, Price, ProductId, UserId};

use crate::models::{Product, User};
use crate::storage::{LocalStore, keys};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("fixed seed timestamp")
}

fn price(cents: i64) -> Price {
    Price::from_cents(cents).expect("positive seed price")
}

fn email(s: &str) -> Email {
    Email::parse(s).expect("valid seed email")
}

fn user(id: &str, address: &str, name: &str, created_at: &str) -> User {
    User {
        id: UserId::new(id),
        email: email(address),
        name: name.to_owned(),
        created_at: ts(created_at),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    description: &str,
    cents: i64,
    category: Category,
    image_url: &str,
    seller: (&str, &str),
    created_at: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        price: price(cents),
        category,
        image_url: image_url.to_owned(),
        seller_id: UserId::new(seller.0),
        seller_name: seller.1.to_owned(),
        created_at: ts(created_at),
        updated_at: ts(created_at),
    }
}

/// The demo users.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        user("1", "john.doe@example.com", "John Doe", "2024-01-15T10:30:00Z"),
        user("2", "sarah.wilson@example.com", "Sarah Wilson", "2024-01-20T14:15:00Z"),
        user("3", "mike.chen@example.com", "Mike Chen", "2024-01-25T09:45:00Z"),
        user("4", "emma.garcia@example.com", "Emma Garcia", "2024-02-01T16:20:00Z"),
    ]
}

/// The demo catalog.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "MacBook Pro 14\" M3 Chip",
            "Barely used MacBook Pro with M3 chip, 16GB RAM, 512GB SSD. Perfect for developers and creative professionals. Includes original charger and box.",
            189_999,
            Category::Electronics,
            "https://images.pexels.com/photos/205421/pexels-photo-205421.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("1", "John Doe"),
            "2024-02-15T10:30:00Z",
        ),
        product(
            "2",
            "Vintage Leather Sofa",
            "Beautiful vintage brown leather sofa in excellent condition. 3-seater, very comfortable. Perfect for living room or office space.",
            65_000,
            Category::Furniture,
            "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("2", "Sarah Wilson"),
            "2024-02-14T14:15:00Z",
        ),
        product(
            "3",
            "iPhone 15 Pro Max",
            "Brand new iPhone 15 Pro Max, 256GB, Natural Titanium. Still in original packaging, never used. Selling due to upgrade.",
            109_999,
            Category::Electronics,
            "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("3", "Mike Chen"),
            "2024-02-13T09:45:00Z",
        ),
        product(
            "4",
            "Designer Winter Coat",
            "Elegant black wool winter coat from premium brand. Size M, worn only a few times. Perfect for professional settings.",
            18_000,
            Category::Clothing,
            "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("4", "Emma Garcia"),
            "2024-02-12T16:20:00Z",
        ),
        product(
            "5",
            "Professional Camera Kit",
            "Canon EOS R6 Mark II with 24-70mm lens, extra batteries, memory cards, and carrying case. Perfect for photography enthusiasts.",
            229_999,
            Category::Electronics,
            "https://images.pexels.com/photos/90946/pexels-photo-90946.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("1", "John Doe"),
            "2024-02-11T11:00:00Z",
        ),
        product(
            "6",
            "Modern Coffee Table",
            "Sleek glass-top coffee table with wooden legs. Minimalist design, perfect for modern living spaces. Excellent condition.",
            22_000,
            Category::Furniture,
            "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("2", "Sarah Wilson"),
            "2024-02-10T13:30:00Z",
        ),
        product(
            "7",
            "Programming Books Collection",
            "Collection of 15 programming books including Clean Code, Design Patterns, and JavaScript guides. Great for developers.",
            12_000,
            Category::Books,
            "https://images.pexels.com/photos/1370295/pexels-photo-1370295.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("3", "Mike Chen"),
            "2024-02-09T15:45:00Z",
        ),
        product(
            "8",
            "Mountain Bike",
            "Trek mountain bike, 21-speed, aluminum frame. Great for trails and city riding. Recently serviced with new tires.",
            45_000,
            Category::Sports,
            "https://images.pexels.com/photos/100582/pexels-photo-100582.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("4", "Emma Garcia"),
            "2024-02-08T12:15:00Z",
        ),
        product(
            "9",
            "Garden Tool Set",
            "Complete garden tool set with shovel, rake, pruning shears, and more. Perfect for gardening enthusiasts. Barely used.",
            8_500,
            Category::HomeAndGarden,
            "https://images.pexels.com/photos/1301856/pexels-photo-1301856.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("1", "John Doe"),
            "2024-02-07T10:00:00Z",
        ),
        product(
            "10",
            "Wireless Headphones",
            "Sony WH-1000XM5 noise-canceling headphones. Excellent sound quality, comfortable for long use. Includes case and cables.",
            28_000,
            Category::Electronics,
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("2", "Sarah Wilson"),
            "2024-02-06T14:30:00Z",
        ),
        product(
            "11",
            "Dining Table Set",
            "Solid wood dining table with 4 chairs. Perfect for small families. Well-maintained and sturdy construction.",
            38_000,
            Category::Furniture,
            "https://images.pexels.com/photos/1080721/pexels-photo-1080721.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("3", "Mike Chen"),
            "2024-02-05T16:45:00Z",
        ),
        product(
            "12",
            "Yoga Mat & Accessories",
            "Premium yoga mat with blocks, strap, and carrying bag. Perfect for home workouts or studio classes. Like new condition.",
            6_500,
            Category::Sports,
            "https://images.pexels.com/photos/3822906/pexels-photo-3822906.jpeg?auto=compress&cs=tinysrgb&w=800",
            ("4", "Emma Garcia"),
            "2024-02-04T11:20:00Z",
        ),
    ]
}

/// The demo liked-index: a few likes per demo user.
#[must_use]
pub fn sample_liked_index() -> BTreeMap<UserId, Vec<ProductId>> {
    let likes = [
        ("1", ["3", "5", "10"]), // John likes iPhone, Camera, and Headphones
        ("2", ["1", "7", "8"]),  // Sarah likes MacBook, Books, and Bike
        ("3", ["2", "4", "12"]), // Mike likes Sofa, Coat, and Yoga Mat
        ("4", ["1", "6", "9"]),  // Emma likes MacBook, Coffee Table, and Garden Tools
    ];
    likes
        .into_iter()
        .map(|(user_id, product_ids)| {
            (
                UserId::new(user_id),
                product_ids.into_iter().map(ProductId::new).collect(),
            )
        })
        .collect()
}

/// Populate any collection that has never been written.
///
/// Idempotent: each of the directory, the catalog, and the liked-index is
/// seeded only if its key is entirely absent from storage. A collection
/// that exists but is empty was put that way on purpose and is left
/// alone.
pub fn initialize(store: &LocalStore) {
    if !store.collection_present(keys::USERS) {
        store.save_users(&sample_users());
        tracing::info!("seeded demo users");
    }

    if !store.collection_present(keys::PRODUCTS) {
        store.save_products(&sample_products());
        tracing::info!("seeded demo catalog");
    }

    if !store.collection_present(keys::LIKED_PRODUCTS) {
        store.save_liked_index(&sample_liked_index());
        tracing::info!("seeded demo likes");
    }
}
