//! CLI subcommand implementations.

pub mod auth;
pub mod likes;
pub mod products;
pub mod seed;

use society_marketplace::models::User;
use society_marketplace::storage::LocalStore;

/// The persisted session, or a friendly error for commands that need one.
pub fn require_user(store: &LocalStore) -> Result<User, Box<dyn std::error::Error>> {
    store
        .current_user()
        .ok_or_else(|| "not logged in (run `sm-cli auth login` first)".into())
}
