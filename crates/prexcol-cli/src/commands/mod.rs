//! Command implementations.

mod forgot_password;
mod login;
mod logout;
mod order_status;
mod orders;
mod products;
mod register;
mod reset_password;
mod stock;
mod stores;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new session (login)
    Login(login::LoginArgs),

    /// Discard the active session
    Logout(logout::LogoutArgs),

    /// Display the authenticated user's profile
    Whoami(whoami::WhoamiArgs),

    /// Register a new account
    Register(register::RegisterArgs),

    /// Request a password reset email
    ForgotPassword(forgot_password::ForgotPasswordArgs),

    /// Complete a password reset
    ResetPassword(reset_password::ResetPasswordArgs),

    /// List products
    Products(products::ProductsArgs),

    /// Adjust a product's stock level
    Stock(stock::StockArgs),

    /// List stores
    Stores(stores::StoresArgs),

    /// List orders or the lines of one order
    Orders(orders::OrdersArgs),

    /// Request an order state transition
    OrderStatus(order_status::OrderStatusArgs),
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Register(args) => register::run(args).await,
        Commands::ForgotPassword(args) => forgot_password::run(args).await,
        Commands::ResetPassword(args) => reset_password::run(args).await,
        Commands::Products(args) => products::run(args).await,
        Commands::Stock(args) => stock::run(args).await,
        Commands::Stores(args) => stores::run(args).await,
        Commands::Orders(args) => orders::run(args).await,
        Commands::OrderStatus(args) => order_status::run(args).await,
    }
}
