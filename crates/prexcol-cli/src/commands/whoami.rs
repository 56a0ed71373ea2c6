//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let client = session::load_client()?;

    let user = client.me().await.context("Failed to fetch profile")?;

    output::field("Email", &user.email);
    output::field("Name", &user.name);
    output::field("Role", user.role.as_str());
    if let Some(phone) = &user.phone {
        output::field("Phone", phone);
    }
    if let Some(address) = &user.address {
        output::field("Address", address);
    }

    Ok(())
}
