//! File-backed credential store.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use prexcol_core::error::StoreError;
use prexcol_core::tokens::CredentialPair;
use prexcol_core::traits::CredentialStore;
use prexcol_core::Result;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored credential data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    access_token: String,
    refresh_token: Option<String>,
}

/// A credential store backed by a JSON file.
///
/// The file is written with mode 0600 on Unix. A missing file reads back as
/// no credentials; clearing removes the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The parent directory must exist; the file itself need not.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn io_error(err: std::io::Error) -> StoreError {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load(&self) -> Result<Option<CredentialPair>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(Self::io_error)?;
        let stored: StoredCredentials =
            serde_json::from_str(&json).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            })?;

        Ok(Some(CredentialPair::new(
            stored.access_token,
            stored.refresh_token,
        )))
    }

    async fn save(&self, pair: &CredentialPair) -> Result<()> {
        let stored = StoredCredentials {
            access_token: pair.access.as_str().to_string(),
            refresh_token: pair.refresh.as_ref().map(|t| t.as_str().to_string()),
        };

        let json = serde_json::to_string_pretty(&stored).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;
        fs::write(&self.path, &json).map_err(Self::io_error)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)
                .map_err(Self::io_error)?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(Self::io_error)?;
        }

        debug!(path = %self.path.display(), "Credentials saved");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(Self::io_error)?;
            debug!(path = %self.path.display(), "Credentials cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("credentials.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let pair = CredentialPair::new("access-1", Some("refresh-1".to_string()));
        store.save(&pair).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access.as_str(), "access-1");
        assert_eq!(loaded.refresh.unwrap().as_str(), "refresh-1");
    }

    #[tokio::test]
    async fn clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&CredentialPair::new("access-1", None))
            .await
            .unwrap();
        store.clear().await.unwrap();

        assert!(!store.path().exists());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn written_file_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&CredentialPair::new("access-1", None))
            .await
            .unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
