//! prexcol-client - Authenticated HTTP client for the PREXCOL API.
//!
//! The [`ApiClient`] attaches the stored access token to outgoing requests,
//! transparently refreshes it once when the backend rejects it, and reports
//! terminal session expiry through an injected [`prexcol_core::SessionSink`]
//! after clearing the injected [`prexcol_core::CredentialStore`].

mod client;
mod endpoints;
mod http;
mod ops;

pub use client::ApiClient;
pub use endpoints::{ListResponse, Page, RegisterRequest};
