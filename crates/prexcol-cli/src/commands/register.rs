//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use prexcol_client::RegisterRequest;
use prexcol_core::types::{ApiUrl, Role};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Account role (admin, comprador, proveedor, logistica, cliente)
    #[arg(long)]
    pub role: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery address
    #[arg(long)]
    pub address: Option<String>,

    /// API base URL
    #[arg(long, default_value = "http://127.0.0.1:8000/api")]
    pub api_url: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let api_url = ApiUrl::new(&args.api_url).context("Invalid API URL")?;

    let role = args
        .role
        .as_deref()
        .map(|r| r.parse::<Role>())
        .transpose()
        .context("Invalid role")?;

    let request = RegisterRequest {
        email: args.email,
        name: args.name,
        password: args.password,
        role,
        phone: args.phone,
        address: args.address,
    };

    let client = session::client_for(api_url)?;
    let user = client
        .register(&request)
        .await
        .context("Failed to register")?;

    output::success("Account registered");
    println!();
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());

    Ok(())
}
