use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{KeyValueStore, Result};
use crate::modules::admin::models::AdminSession;
use crate::storage::ADMIN_KEY;

/// Persistence port for the admin login
#[async_trait]
pub trait AdminSessionRepository: Send + Sync {
    async fn load(&self) -> Result<Option<AdminSession>>;

    async fn save(&self, session: &AdminSession) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}

/// Admin session stored as `{"username": ...}` under the `@taptaze_admin` key
pub struct StoredAdminSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoredAdminSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AdminSessionRepository for StoredAdminSessionRepository {
    async fn load(&self) -> Result<Option<AdminSession>> {
        match self.store.get(ADMIN_KEY).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &AdminSession) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.store.set(ADMIN_KEY, &raw).await
    }

    async fn clear(&self) -> Result<()> {
        self.store.remove(ADMIN_KEY).await
    }
}
