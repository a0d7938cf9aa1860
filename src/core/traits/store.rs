use async_trait::async_trait;

use crate::core::Result;

/// String-keyed key-value store used for on-device persistence
///
/// Values are opaque strings; callers serialize their own snapshots.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
