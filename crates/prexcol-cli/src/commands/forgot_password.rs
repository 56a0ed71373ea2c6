//! Forgot-password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use prexcol_core::types::ApiUrl;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ForgotPasswordArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,
}

pub async fn run(args: ForgotPasswordArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;

    let client = session::client_for(api_url)?;
    let message = client
        .forgot_password(&args.email)
        .await
        .context("Failed to request password reset")?;

    output::success(&message);
    Ok(())
}
