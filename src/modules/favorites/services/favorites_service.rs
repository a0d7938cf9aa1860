use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::Result;
use crate::modules::catalog::models::{Product, ProductQuery};
use crate::modules::catalog::services::CatalogApi;
use crate::modules::favorites::repositories::FavoritesRepository;

/// Persisted list of favorited product ids
///
/// Same durability policy as the cart: writes are best-effort, failures
/// are logged and the in-memory list stays authoritative.
pub struct FavoritesService {
    ids: Vec<String>,
    repository: Arc<dyn FavoritesRepository>,
}

impl FavoritesService {
    pub fn new(repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            ids: Vec::new(),
            repository,
        }
    }

    pub async fn load(repository: Arc<dyn FavoritesRepository>) -> Self {
        let mut service = Self::new(repository);
        service.rehydrate().await;
        service
    }

    /// Reload ids from storage; unreadable data yields an empty list
    pub async fn rehydrate(&mut self) {
        self.ids = match self.repository.load().await {
            Ok(Some(mut ids)) => {
                let mut seen = std::collections::HashSet::new();
                ids.retain(|id| seen.insert(id.clone()));
                ids
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Stored favorites unreadable, starting empty");
                Vec::new()
            }
        };
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.ids.iter().any(|id| id == product_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add or remove `product_id`; returns whether it is now a favorite
    pub async fn toggle(&mut self, product_id: &str) -> bool {
        let now_favorite = if self.contains(product_id) {
            self.ids.retain(|id| id != product_id);
            false
        } else {
            self.ids.push(product_id.to_string());
            true
        };

        debug!(product_id = %product_id, favorite = now_favorite, "Favorite toggled");
        self.persist().await;
        now_favorite
    }

    /// Remove `product_id`; absent ids are a no-op
    pub async fn remove(&mut self, product_id: &str) {
        self.ids.retain(|id| id != product_id);
        self.persist().await;
    }

    /// Resolve favorite ids into products, in catalog order
    ///
    /// Ids no longer in the catalog are skipped. No request is made when
    /// there are no favorites.
    pub async fn favorite_products(&self, catalog: &dyn CatalogApi) -> Result<Vec<Product>> {
        if self.ids.is_empty() {
            return Ok(Vec::new());
        }

        let products = catalog.list_products(&ProductQuery::all()).await?;
        Ok(products
            .into_iter()
            .filter(|product| self.contains(&product.id))
            .collect())
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.save(&self.ids).await {
            warn!(error = %e, "Failed to persist favorites");
        }
    }
}
