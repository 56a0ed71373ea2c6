//! User operations.

use tracing::{debug, instrument};

use prexcol_core::models::{ProfileUpdate, UserProfile};
use prexcol_core::Result;

use crate::client::ApiClient;
use crate::endpoints::{ListResponse, ME, PROVIDERS, USERS};

impl ApiClient {
    /// Fetch the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserProfile> {
        debug!("Fetching own profile");
        self.get(ME).await
    }

    /// Update the authenticated user's profile.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        debug!("Updating own profile");
        self.put(ME, update).await
    }

    /// List all user accounts. Admin only.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserProfile>> {
        debug!("Listing users");
        let list: ListResponse<UserProfile> = self.get(USERS).await?;
        Ok(list.into_items())
    }

    /// List active provider accounts. Admin only.
    #[instrument(skip(self))]
    pub async fn list_providers(&self) -> Result<Vec<UserProfile>> {
        debug!("Listing providers");
        let list: ListResponse<UserProfile> = self.get(PROVIDERS).await?;
        Ok(list.into_items())
    }
}
