//! prexcol-core - Core types and traits for the PREXCOL API client.

pub mod credentials;
pub mod error;
pub mod models;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use models::{
    NewOrder, NewOrderLine, Order, OrderLine, Product, ProfileUpdate, StockAdjustment,
    StockOperation, Store, UserProfile,
};
pub use tokens::{AccessToken, CredentialPair, RefreshToken};
pub use traits::{CredentialStore, NullSink, SessionSink};
pub use types::{ApiUrl, OrderStatus, Role};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
