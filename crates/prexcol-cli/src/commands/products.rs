//! Products command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// List only the products supplied by the current account
    #[arg(long, conflicts_with = "store")]
    pub mine: bool,

    /// List the products stocked by a store
    #[arg(long)]
    pub store: Option<u64>,

    /// Fetch a single product by id
    #[arg(long, conflicts_with_all = ["mine", "store"])]
    pub id: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ProductsArgs) -> Result<()> {
    let client = session::load_client()?;

    if let Some(id) = args.id {
        let product = client
            .get_product(id)
            .await
            .context("Failed to fetch product")?;
        return output::json_pretty(&product);
    }

    let products = if args.mine {
        client.my_products().await
    } else if let Some(store_id) = args.store {
        client.products_by_store(store_id).await
    } else {
        client.list_products().await
    }
    .context("Failed to list products")?;

    if products.is_empty() {
        eprintln!("{}", "No products found.".dimmed());
        return Ok(());
    }

    for product in &products {
        if args.pretty {
            output::json_pretty(product)?;
            println!();
        } else {
            output::json(product)?;
        }
    }

    Ok(())
}
