//! Society Marketplace CLI - browse, list, and like from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! sm-cli products list --search iphone --category Electronics
//!
//! # Register, then add a listing
//! sm-cli auth signup -e ann@example.com -p secret -n "Ann"
//! sm-cli products add --title "Desk Lamp" --description "Adjustable brass desk lamp." \
//!     --price 20 --category Furniture --image-url https://example.com/lamp.jpg
//!
//! # Like something
//! sm-cli likes toggle 3
//! ```
//!
//! # Commands
//!
//! - `auth` - login, signup, logout, whoami
//! - `products` - list, add, edit, rm, mine
//! - `likes` - toggle, list
//! - `seed` - reset the demo dataset
//!
//! State lives in the data directory (`MARKETPLACE_DATA_DIR`, default
//! `.society-marketplace`); the demo dataset is seeded on first run.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use society_marketplace::config::MarketplaceConfig;
use society_marketplace::seed;
use society_marketplace::storage::LocalStore;

mod commands;

#[derive(Parser)]
#[command(name = "sm-cli")]
#[command(author, version, about = "Society Marketplace CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Browse and manage listings
    Products {
        #[command(subcommand)]
        action: commands::products::ProductAction,
    },
    /// Manage liked listings
    Likes {
        #[command(subcommand)]
        action: commands::likes::LikeAction,
    },
    /// Reset the store to the demo dataset
    Seed {
        /// Clear all collections before reseeding
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = MarketplaceConfig::from_env()?;
    let store = LocalStore::open(&config.data_dir)?;

    // Bootstrap: on every startup, seed whichever collections have never
    // been written. Never touches existing data.
    seed::initialize(&store);

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&store, &config, action).await?,
        Commands::Products { action } => commands::products::run(&store, &config, action).await?,
        Commands::Likes { action } => commands::likes::run(&store, &config, action)?,
        Commands::Seed { reset } => commands::seed::run(&store, reset),
    }
    Ok(())
}
