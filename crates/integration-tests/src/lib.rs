//! Shared fixtures for the integration tests.
//!
//! Every scenario runs against a real [`FileStore`] in a temp directory,
//! with simulated latency disabled so the suite stays fast.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use rust_decimal::Decimal;
use tempfile::TempDir;

use society_marketplace::services::catalog::ProductDraft;
use society_marketplace::storage::LocalStore;
use society_marketplace_core::Category;

/// Latency used by all integration scenarios.
pub const NO_LATENCY: Duration = Duration::ZERO;

/// A file store in a fresh temp directory.
///
/// Returns the guard alongside the store; dropping the guard removes the
/// directory.
///
/// # Panics
///
/// Panics if the temp directory or store cannot be created - fine in a
/// test fixture.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn temp_store() -> (TempDir, LocalStore) {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    (dir, store)
}

/// A valid draft for a small furniture listing.
#[must_use]
pub fn lamp_draft() -> ProductDraft {
    ProductDraft {
        title: "Lamp".to_owned(),
        description: "Adjustable brass desk lamp in working order.".to_owned(),
        price: Decimal::new(2_000, 2),
        category: Category::Furniture,
        image_url: "https://x/l.jpg".to_owned(),
    }
}
