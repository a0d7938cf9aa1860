use async_trait::async_trait;
use reqwest::Method;

use crate::client::ApiClient;
use crate::core::Result;
use crate::modules::orders::models::{CreateOrderRequest, Order};

/// Order submission and listing
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Submit an order; the API re-checks stock and may reject it
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order>;

    /// Visible orders, newest first
    async fn list_orders(&self) -> Result<Vec<Order>>;
}

#[async_trait]
impl OrderApi for ApiClient {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        self.send_json(Method::POST, "/orders", request).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.get_json("/orders").await
    }
}
