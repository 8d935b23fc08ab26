//! Bootstrap scenarios over a real file store.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use society_marketplace::seed;
use society_marketplace::services::auth::AuthService;
use society_marketplace::storage::LocalStore;
use society_marketplace_integration_tests::{NO_LATENCY, temp_store};

#[test]
fn seeding_twice_equals_seeding_once() {
    let (_dir, store) = temp_store();

    seed::initialize(&store);
    let once = (store.users(), store.products());

    seed::initialize(&store);
    assert_eq!((store.users(), store.products()), once);
}

#[test]
fn seeding_skips_collections_written_as_empty() {
    let (_dir, store) = temp_store();

    // A user cleared their catalog on purpose; it stays cleared.
    store.save_products(&[]);
    seed::initialize(&store);

    assert!(store.products().is_empty());
    assert_eq!(store.users().len(), 4);
}

#[tokio::test]
async fn seeding_never_overwrites_registered_users() {
    let (dir, store) = temp_store();
    let mut auth = AuthService::new(&store, NO_LATENCY);
    auth.initialize();
    auth.signup("ann@x.com", SecretString::from("pw"), "Ann")
        .await
        .unwrap();

    // Restart: bootstrap runs again over the same directory.
    let reopened = LocalStore::open(dir.path()).unwrap();
    seed::initialize(&reopened);

    let users = reopened.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users.first().unwrap().name, "Ann");
    // Collections that were never written do get seeded.
    assert_eq!(reopened.products().len(), 12);
}

#[test]
fn corrupted_document_reads_empty_but_blocks_reseed() {
    let (dir, store) = temp_store();
    std::fs::write(dir.path().join("products.json"), "{definitely not json").unwrap();

    // The document exists, so seeding leaves it alone; reads recover to
    // the empty default.
    seed::initialize(&store);
    assert!(store.products().is_empty());
}
