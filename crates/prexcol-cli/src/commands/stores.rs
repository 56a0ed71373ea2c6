//! Stores command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct StoresArgs {
    /// List only the stores administered by the current account
    #[arg(long)]
    pub mine: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: StoresArgs) -> Result<()> {
    let client = session::load_client()?;

    let stores = if args.mine {
        client.my_stores().await
    } else {
        client.list_stores().await
    }
    .context("Failed to list stores")?;

    if stores.is_empty() {
        eprintln!("{}", "No stores found.".dimmed());
        return Ok(());
    }

    for store in &stores {
        if args.pretty {
            output::json_pretty(store)?;
            println!();
        } else {
            output::json(store)?;
        }
    }

    Ok(())
}
