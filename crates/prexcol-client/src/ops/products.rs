//! Product operations.

use tracing::{debug, instrument};

use prexcol_core::models::{Product, StockAdjustment, StockOperation};
use prexcol_core::Result;

use crate::client::ApiClient;
use crate::endpoints::{
    ListResponse, MY_PRODUCTS, PRODUCTS, PRODUCTS_BY_STORE, StockAdjustRequest, adjust_stock_path,
    product_path,
};

impl ApiClient {
    /// List products visible to the current account.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        debug!("Listing products");
        let list: ListResponse<Product> = self.get(PRODUCTS).await?;
        Ok(list.into_items())
    }

    /// List the products supplied by the current account. Providers only.
    #[instrument(skip(self))]
    pub async fn my_products(&self) -> Result<Vec<Product>> {
        debug!("Listing own products");
        let list: ListResponse<Product> = self.get(MY_PRODUCTS).await?;
        Ok(list.into_items())
    }

    /// Fetch a single product.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> Result<Product> {
        debug!("Fetching product");
        self.get(&product_path(id)).await
    }

    /// List the products stocked by a store.
    #[instrument(skip(self))]
    pub async fn products_by_store(&self, store_id: u64) -> Result<Vec<Product>> {
        debug!("Listing products by store");
        let query = [("tienda_id", store_id)];
        let list: ListResponse<Product> = self.get_query(PRODUCTS_BY_STORE, &query).await?;
        Ok(list.into_items())
    }

    /// Adjust a product's stock level.
    #[instrument(skip(self))]
    pub async fn adjust_stock(
        &self,
        id: u64,
        operation: StockOperation,
        quantity: u32,
    ) -> Result<StockAdjustment> {
        debug!("Adjusting stock");
        let request = StockAdjustRequest {
            operation,
            quantity,
        };
        self.post(&adjust_stock_path(id), &request).await
    }
}
