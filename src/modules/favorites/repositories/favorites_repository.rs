use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{KeyValueStore, Result};
use crate::storage::FAVORITES_KEY;

/// Persistence port for favorited product ids
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<String>>>;

    async fn save(&self, ids: &[String]) -> Result<()>;
}

/// Favorite ids stored as a JSON array under the `@favorites` key
pub struct StoredFavoritesRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoredFavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoritesRepository for StoredFavoritesRepository {
    async fn load(&self) -> Result<Option<Vec<String>>> {
        match self.store.get(FAVORITES_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, ids: &[String]) -> Result<()> {
        let raw = serde_json::to_string(ids)?;
        self.store.set(FAVORITES_KEY, &raw).await
    }
}
