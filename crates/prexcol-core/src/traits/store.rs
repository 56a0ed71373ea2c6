//! Credential store trait.

use async_trait::async_trait;

use crate::Result;
use crate::tokens::CredentialPair;

/// Persistence surface for the session's credential pair.
///
/// The authenticated client is the only writer and reader. Implementations
/// only need to hold the pair durably enough for their host: an in-memory
/// store for tests and embedded use, a file store for the CLI.
///
/// Injected into the client explicitly so the client can be exercised
/// against an in-memory store without any ambient global state.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored credential pair, if any.
    async fn load(&self) -> Result<Option<CredentialPair>>;

    /// Replace the stored credential pair.
    async fn save(&self, pair: &CredentialPair) -> Result<()>;

    /// Remove all stored credentials.
    ///
    /// Clearing an already-empty store is not an error.
    async fn clear(&self) -> Result<()>;
}
