//! Orders command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct OrdersArgs {
    /// List orders awaiting acceptance
    #[arg(long, conflicts_with = "preparing")]
    pub pending: bool,

    /// List orders being prepared
    #[arg(long)]
    pub preparing: bool,

    /// List the lines of one order instead
    #[arg(long, conflicts_with_all = ["pending", "preparing"])]
    pub lines: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: OrdersArgs) -> Result<()> {
    let client = session::load_client()?;

    if let Some(order_id) = args.lines {
        let lines = client
            .order_lines(order_id)
            .await
            .context("Failed to list order lines")?;

        if lines.is_empty() {
            eprintln!("{}", "No lines found.".dimmed());
            return Ok(());
        }
        for line in &lines {
            output::json(line)?;
        }
        return Ok(());
    }

    let orders = if args.pending {
        client.pending_orders().await
    } else if args.preparing {
        client.orders_in_preparation().await
    } else {
        client.my_orders().await
    }
    .context("Failed to list orders")?;

    if orders.is_empty() {
        eprintln!("{}", "No orders found.".dimmed());
        return Ok(());
    }

    for order in &orders {
        if args.pretty {
            output::json_pretty(order)?;
            println!();
        } else {
            output::json(order)?;
        }
    }

    Ok(())
}
