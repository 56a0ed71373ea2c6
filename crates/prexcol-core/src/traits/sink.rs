//! Session expiry notification trait.

use async_trait::async_trait;

/// Receiver for terminal session-expiry notifications.
///
/// The client invokes [`SessionSink::session_expired`] after it has
/// exhausted token refresh and cleared the credential store. The host
/// application decides what to do with the notification (typically: send
/// the user back to a login surface). The client itself never navigates.
///
/// Hosts should treat the notification as idempotent: concurrent requests
/// that expire together may each report the expiry.
#[async_trait]
pub trait SessionSink: Send + Sync {
    /// Called once per request that reaches terminal authentication failure.
    async fn session_expired(&self);
}

/// A sink that ignores notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

#[async_trait]
impl SessionSink for NullSink {
    async fn session_expired(&self) {}
}
