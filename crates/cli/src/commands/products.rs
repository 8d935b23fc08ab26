//! Listing commands.

use clap::Subcommand;
use rust_decimal::Decimal;

use society_marketplace::config::MarketplaceConfig;
use society_marketplace::models::Product;
use society_marketplace::services::catalog::{CatalogService, ProductDraft};
use society_marketplace::storage::LocalStore;
use society_marketplace_core::{Category, ProductId};

use super::require_user;

#[derive(Subcommand)]
pub enum ProductAction {
    /// Browse the catalog
    List {
        /// Free-text search over title and description
        #[arg(long)]
        search: Option<String>,

        /// Restrict to one category (e.g. "Electronics", "Home & Garden")
        #[arg(long)]
        category: Option<Category>,
    },
    /// Add a listing
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Price, e.g. 20 or 1899.99
        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        category: Category,

        #[arg(long)]
        image_url: String,
    },
    /// Edit one of your listings
    Edit {
        /// Listing id
        id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        category: Category,

        #[arg(long)]
        image_url: String,
    },
    /// Remove one of your listings
    Rm {
        /// Listing id
        id: String,
    },
    /// Show your listings
    Mine,
}

pub async fn run(
    store: &LocalStore,
    config: &MarketplaceConfig,
    action: ProductAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogService::new(store, config.simulated_latency);

    match action {
        ProductAction::List { search, category } => {
            let products = catalog.search(search.as_deref().unwrap_or(""), category);
            print_products(&products);
        }
        ProductAction::Add {
            title,
            description,
            price,
            category,
            image_url,
        } => {
            let seller = require_user(store)?;
            let draft = ProductDraft {
                title,
                description,
                price,
                category,
                image_url,
            };
            let product = catalog.add_product(draft, &seller).await?;
            println!("Listed \"{}\" (id {})", product.title, product.id);
        }
        ProductAction::Edit {
            id,
            title,
            description,
            price,
            category,
            image_url,
        } => {
            let seller = require_user(store)?;
            let draft = ProductDraft {
                title,
                description,
                price,
                category,
                image_url,
            };
            match catalog
                .update_product(&ProductId::new(id), draft, &seller)
                .await?
            {
                Some(product) => println!("Updated \"{}\"", product.title),
                None => println!("No such listing."),
            }
        }
        ProductAction::Rm { id } => {
            let seller = require_user(store)?;
            if catalog.delete_product(&ProductId::new(id), &seller)? {
                println!("Listing removed.");
            } else {
                println!("No such listing.");
            }
        }
        ProductAction::Mine => {
            let seller = require_user(store)?;
            print_products(&catalog.my_products(&seller.id));
        }
    }
    Ok(())
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for p in products {
        println!(
            "{:>4}  {:<32} {:>10}  {:<13}  by {}",
            p.id, p.title, p.price, p.category, p.seller_name
        );
    }
    println!("{} product(s)", products.len());
}
