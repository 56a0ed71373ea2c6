//! In-memory credential store.

use std::sync::RwLock;

use async_trait::async_trait;

use prexcol_core::tokens::CredentialPair;
use prexcol_core::traits::CredentialStore;
use prexcol_core::Result;

/// A credential store holding the pair in process memory.
///
/// Intended for tests and for embedding the client where no persistence is
/// wanted; credentials vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pair: RwLock<Option<CredentialPair>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a credential pair.
    pub fn with_pair(pair: CredentialPair) -> Self {
        Self {
            pair: RwLock::new(Some(pair)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load(&self) -> Result<Option<CredentialPair>> {
        Ok(self.pair.read().unwrap().clone())
    }

    async fn save(&self, pair: &CredentialPair) -> Result<()> {
        *self.pair.write().unwrap() = Some(pair.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.pair.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let pair = CredentialPair::new("access-1", Some("refresh-1".to_string()));
        store.save(&pair).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access.as_str(), "access-1");
        assert_eq!(loaded.refresh.unwrap().as_str(), "refresh-1");
    }

    #[tokio::test]
    async fn clear_removes_credentials() {
        let store = MemoryStore::with_pair(CredentialPair::new("access-1", None));
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_on_empty_store_is_ok() {
        let store = MemoryStore::new();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
