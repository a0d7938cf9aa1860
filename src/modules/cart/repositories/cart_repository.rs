use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{KeyValueStore, Result};
use crate::modules::cart::models::CartLine;
use crate::storage::CART_KEY;

/// Persistence port for the cart snapshot
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Load the last saved line list; `Ok(None)` when nothing was saved
    async fn load(&self) -> Result<Option<Vec<CartLine>>>;

    /// Replace the saved snapshot with `lines`
    async fn save(&self, lines: &[CartLine]) -> Result<()>;
}

/// Cart snapshot stored as a JSON array under the `@cart` key
pub struct StoredCartRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCartRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for StoredCartRepository {
    async fn load(&self) -> Result<Option<Vec<CartLine>>> {
        let Some(raw) = self.store.get(CART_KEY).await? else {
            return Ok(None);
        };
        let lines: Vec<CartLine> = serde_json::from_str(&raw)?;
        Ok(Some(lines))
    }

    async fn save(&self, lines: &[CartLine]) -> Result<()> {
        let raw = serde_json::to_string(lines)?;
        self.store.set(CART_KEY, &raw).await
    }
}
