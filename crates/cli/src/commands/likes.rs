//! Liked-listing commands.

use clap::Subcommand;

use society_marketplace::config::MarketplaceConfig;
use society_marketplace::services::catalog::CatalogService;
use society_marketplace::storage::LocalStore;
use society_marketplace_core::ProductId;

use super::require_user;

#[derive(Subcommand)]
pub enum LikeAction {
    /// Like a listing, or unlike it if already liked
    Toggle {
        /// Listing id
        id: String,
    },
    /// Show your liked listings
    List,
}

pub fn run(
    store: &LocalStore,
    config: &MarketplaceConfig,
    action: LikeAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = require_user(store)?;
    let catalog = CatalogService::new(store, config.simulated_latency);

    match action {
        LikeAction::Toggle { id } => {
            let liked = catalog.toggle_like(&user.id, &ProductId::new(id));
            println!("{}", if liked { "Liked." } else { "Unliked." });
        }
        LikeAction::List => {
            let liked = catalog.liked_products(&user.id);
            if liked.is_empty() {
                println!("No liked products yet.");
            } else {
                for p in &liked {
                    println!("{:>4}  {:<32} {:>10}", p.id, p.title, p.price);
                }
            }
        }
    }
    Ok(())
}
