//! CLI session wiring: profile persistence and client construction.
//!
//! The API URL is kept in a profile file; the credential pair itself lives
//! in a [`FileStore`] that the client reads and writes on its own. Logging
//! in through a client built here persists the tokens without any extra
//! bookkeeping in the command code.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use prexcol_client::ApiClient;
use prexcol_core::traits::SessionSink;
use prexcol_core::types::ApiUrl;
use prexcol_store::FileStore;

use crate::output;

/// Stored CLI profile.
#[derive(Debug, Serialize, Deserialize)]
struct Profile {
    api_url: ApiUrl,
}

/// Get the CLI data directory, creating it if needed.
fn data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "prexcol").context("Could not determine config directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.to_path_buf())
}

fn profile_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("profile.json"))
}

fn credentials_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("credentials.json"))
}

/// Save the profile to disk.
pub fn save_profile(api_url: &ApiUrl) -> Result<()> {
    let profile = Profile {
        api_url: api_url.clone(),
    };
    let json = serde_json::to_string_pretty(&profile)?;
    fs::write(profile_path()?, &json).context("Failed to write profile file")?;
    Ok(())
}

/// Load the profile from disk.
pub fn load_profile() -> Result<Option<ApiUrl>> {
    let path = profile_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read profile file")?;
    let profile: Profile = serde_json::from_str(&json).context("Invalid profile file")?;
    Ok(Some(profile.api_url))
}

/// Sink that tells the user to log in again when the session expires.
struct ExpiredSink;

#[async_trait]
impl SessionSink for ExpiredSink {
    async fn session_expired(&self) {
        output::error("Session expired. Run 'prexcol login' to authenticate again.");
    }
}

/// Build a client for the given API URL, backed by the CLI credential file.
pub fn client_for(api_url: ApiUrl) -> Result<ApiClient> {
    let store = FileStore::new(credentials_path()?);
    Ok(ApiClient::with_sink(
        api_url,
        Arc::new(store),
        Arc::new(ExpiredSink),
    ))
}

/// Build a client from the saved profile.
pub fn load_client() -> Result<ApiClient> {
    let api_url = load_profile()?.context("No active session. Run 'prexcol login' first.")?;
    tracing::debug!(api = %api_url, "Using saved profile");
    client_for(api_url)
}
