use async_trait::async_trait;

use crate::client::ApiClient;
use crate::core::Result;
use crate::modules::catalog::models::{Category, Product, ProductQuery};

/// Read access to categories and products
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// List products, optionally filtered by category and free-text search
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    /// Fetch a single product; unknown ids yield `AppError::NotFound`
    async fn get_product(&self, id: &str) -> Result<Product>;
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/categories").await
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.get_json_with_query("/products", query).await?;
        tracing::debug!(
            category_id = ?query.category_id,
            search = ?query.search,
            count = products.len(),
            "Loaded products"
        );
        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        self.get_json(&format!("/products/{}", id)).await
    }
}
