//! Stock adjustment command implementation.

use anyhow::{Context, Result};
use clap::Args;

use prexcol_core::models::StockOperation;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct StockArgs {
    /// Product id
    pub product: u64,

    /// Units to add to the stock level
    #[arg(long, conflicts_with = "decrease")]
    pub increase: Option<u32>,

    /// Units to remove from the stock level
    #[arg(long)]
    pub decrease: Option<u32>,
}

pub async fn run(args: StockArgs) -> Result<()> {
    let (operation, quantity) = match (args.increase, args.decrease) {
        (Some(quantity), None) => (StockOperation::Increase, quantity),
        (None, Some(quantity)) => (StockOperation::Decrease, quantity),
        _ => anyhow::bail!("Specify exactly one of --increase or --decrease"),
    };

    let client = session::load_client()?;
    let adjustment = client
        .adjust_stock(args.product, operation, quantity)
        .await
        .context("Failed to adjust stock")?;

    output::success(
        adjustment
            .message
            .as_deref()
            .unwrap_or("Stock adjusted"),
    );
    output::field("Product", &adjustment.product_id.to_string());
    output::field("Stock", &adjustment.new_stock.to_string());

    Ok(())
}
