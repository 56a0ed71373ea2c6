//! Reset-password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use prexcol_core::types::ApiUrl;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Uid from the reset email link
    pub uid: String,

    /// Token from the reset email link
    pub token: String,

    /// New password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,
}

pub async fn run(args: ResetPasswordArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;

    let client = session::client_for(api_url)?;
    let message = client
        .reset_password(&args.uid, &args.token, &args.password)
        .await
        .context("Failed to reset password")?;

    output::success(&message);
    Ok(())
}
