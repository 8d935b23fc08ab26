//! Demo-dataset command.

use society_marketplace::seed;
use society_marketplace::storage::LocalStore;

/// Seed any never-written collection; with `reset`, clear everything
/// first so the demo dataset comes back in full.
pub fn run(store: &LocalStore, reset: bool) {
    if reset {
        store.clear_all();
        tracing::info!("store cleared");
    }

    seed::initialize(store);

    println!(
        "Store ready: {} user(s), {} product(s).",
        store.users().len(),
        store.products().len()
    );
}
