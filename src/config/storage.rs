use crate::core::Result;
use crate::storage::FileStore;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// On-device storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        Ok(StorageConfig {
            dir: env::var("STORAGE_DIR")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
        })
    }

    /// Open the file-backed key-value store
    pub fn open_store(&self) -> FileStore {
        FileStore::new(&self.dir)
    }
}
