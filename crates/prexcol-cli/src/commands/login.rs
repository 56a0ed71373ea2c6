//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use prexcol_core::types::ApiUrl;
use prexcol_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let client = session::client_for(api_url.clone())?;
    let user = client
        .login(&credentials)
        .await
        .context("Failed to login")?;

    // The credential pair is already persisted through the client's store;
    // only the profile needs saving here.
    session::save_profile(&api_url).context("Failed to save profile")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &user.email);
    output::field("Name", &user.name);
    output::field("Role", user.role.as_str());
    output::field("API", api_url.as_str());

    Ok(())
}
