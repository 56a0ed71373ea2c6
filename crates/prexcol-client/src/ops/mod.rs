//! Typed operations over the business endpoints, one module per group.

mod orders;
mod products;
mod stores;
mod users;
