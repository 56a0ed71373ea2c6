//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let Some(api_url) = session::load_profile()? else {
        output::error("No active session.");
        return Ok(());
    };

    let client = session::client_for(api_url)?;
    client.logout().await.context("Failed to discard session")?;

    output::success("Logged out");
    Ok(())
}
