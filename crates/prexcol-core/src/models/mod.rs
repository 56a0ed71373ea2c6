//! Domain models for the PREXCOL API.
//!
//! These are typed renditions of the backend's wire objects. Field names on
//! the wire are the backend's Spanish identifiers; serde renames keep the
//! Rust surface English. Monetary decimals arrive as JSON strings and are
//! carried as strings.

mod catalog;
mod order;
mod user;

pub use catalog::{Product, StockAdjustment, StockOperation, Store};
pub use order::{NewOrder, NewOrderLine, Order, OrderLine};
pub use user::{ProfileUpdate, UserProfile};

/// Serde default for boolean flags the backend omits on trimmed payloads.
pub(crate) fn active_default() -> bool {
    true
}
