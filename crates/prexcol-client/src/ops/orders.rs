//! Order operations.

use tracing::{debug, instrument};

use prexcol_core::models::{NewOrder, Order, OrderLine};
use prexcol_core::types::OrderStatus;
use prexcol_core::Result;

use crate::client::ApiClient;
use crate::endpoints::{
    CREATE_ORDER, ChangeOrderStatusRequest, ListResponse, MY_ORDERS, ORDER_LINES, ORDERS_IN_PREPARATION,
    PENDING_ORDERS, change_order_status_path,
};

impl ApiClient {
    /// Create a new order. Clients only.
    #[instrument(skip(self, order), fields(store = order.store_id))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        debug!("Creating order");
        self.post(CREATE_ORDER, order).await
    }

    /// List the orders visible to the current account's role.
    #[instrument(skip(self))]
    pub async fn my_orders(&self) -> Result<Vec<Order>> {
        debug!("Listing own orders");
        let list: ListResponse<Order> = self.get(MY_ORDERS).await?;
        Ok(list.into_items())
    }

    /// List orders awaiting acceptance. Buyers only.
    #[instrument(skip(self))]
    pub async fn pending_orders(&self) -> Result<Vec<Order>> {
        debug!("Listing pending orders");
        let list: ListResponse<Order> = self.get(PENDING_ORDERS).await?;
        Ok(list.into_items())
    }

    /// List orders being prepared. Logistics only.
    #[instrument(skip(self))]
    pub async fn orders_in_preparation(&self) -> Result<Vec<Order>> {
        debug!("Listing orders in preparation");
        let list: ListResponse<Order> = self.get(ORDERS_IN_PREPARATION).await?;
        Ok(list.into_items())
    }

    /// Request an order state transition.
    ///
    /// Whether the transition is allowed for the current role and order
    /// state is the backend's decision.
    #[instrument(skip(self))]
    pub async fn set_order_status(&self, id: u64, status: OrderStatus) -> Result<Order> {
        debug!("Changing order status");
        let request = ChangeOrderStatusRequest { status };
        self.post(&change_order_status_path(id), &request).await
    }

    /// List the lines of an order.
    #[instrument(skip(self))]
    pub async fn order_lines(&self, order_id: u64) -> Result<Vec<OrderLine>> {
        debug!("Listing order lines");
        let query = [("pedido_id", order_id)];
        let list: ListResponse<OrderLine> = self.get_query(ORDER_LINES, &query).await?;
        Ok(list.into_items())
    }
}
