use async_trait::async_trait;
use reqwest::Method;

use crate::client::ApiClient;
use crate::core::Result;
use crate::modules::admin::models::{
    AdminCredentials, AdminSession, AdminStats, OrderStatusUpdate, ProductInput,
};
use crate::modules::catalog::models::Product;
use crate::modules::orders::models::OrderStatus;

/// Back-office operations behind the admin panel
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Wrong credentials yield `AppError::Unauthorized`
    async fn login(&self, credentials: &AdminCredentials) -> Result<AdminSession>;

    async fn stats(&self) -> Result<AdminStats>;

    async fn create_product(&self, input: &ProductInput) -> Result<Product>;

    async fn update_product(&self, product_id: &str, input: &ProductInput) -> Result<Product>;

    async fn delete_product(&self, product_id: &str) -> Result<()>;

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Result<()>;

    /// Hides the order from listings; the API keeps the record
    async fn delete_order(&self, order_id: &str) -> Result<()>;
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn login(&self, credentials: &AdminCredentials) -> Result<AdminSession> {
        let session: AdminSession = self
            .send_json(Method::POST, "/admin/login", credentials)
            .await?;
        tracing::debug!(username = %session.username, "Admin login accepted");
        Ok(session)
    }

    async fn stats(&self) -> Result<AdminStats> {
        self.get_json("/admin/stats").await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product> {
        input.validate()?;
        self.send_json(Method::POST, "/admin/products", input).await
    }

    async fn update_product(&self, product_id: &str, input: &ProductInput) -> Result<Product> {
        input.validate()?;
        self.send_json(Method::PUT, &format!("/admin/products/{}", product_id), input)
            .await
    }

    async fn delete_product(&self, product_id: &str) -> Result<()> {
        self.delete(&format!("/admin/products/{}", product_id)).await
    }

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Result<()> {
        let _: serde_json::Value = self
            .send_json(
                Method::PATCH,
                &format!("/admin/orders/{}", order_id),
                &OrderStatusUpdate { status },
            )
            .await?;
        Ok(())
    }

    async fn delete_order(&self, order_id: &str) -> Result<()> {
        self.delete(&format!("/admin/orders/{}", order_id)).await
    }
}
