//! Order status command implementation.

use anyhow::{Context, Result};
use clap::Args;

use prexcol_core::types::OrderStatus;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct OrderStatusArgs {
    /// Order id
    pub order: u64,

    /// Target state (pendiente, preparando, en_transito, entregado, cancelado)
    pub status: String,
}

pub async fn run(args: OrderStatusArgs) -> Result<()> {
    let status: OrderStatus = args.status.parse().context("Invalid order status")?;

    let client = session::load_client()?;
    let order = client
        .set_order_status(args.order, status)
        .await
        .context("Failed to change order status")?;

    output::success("Order updated");
    output::field("Order", &order.id.to_string());
    output::field("Status", order.status.as_str());

    Ok(())
}
