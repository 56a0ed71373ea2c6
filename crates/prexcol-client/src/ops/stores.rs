//! Store operations.

use tracing::{debug, instrument};

use prexcol_core::models::Store;
use prexcol_core::Result;

use crate::client::ApiClient;
use crate::endpoints::{ListResponse, MY_STORES, STORES};

impl ApiClient {
    /// List active stores.
    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<Store>> {
        debug!("Listing stores");
        let list: ListResponse<Store> = self.get(STORES).await?;
        Ok(list.into_items())
    }

    /// List the stores administered by the current account. Buyers only.
    #[instrument(skip(self))]
    pub async fn my_stores(&self) -> Result<Vec<Store>> {
        debug!("Listing own stores");
        let list: ListResponse<Store> = self.get(MY_STORES).await?;
        Ok(list.into_items())
    }
}
