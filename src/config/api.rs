use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Storefront REST API settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server root; endpoints live under `{base_url}/api`
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(ApiConfig {
            base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "https://taptaze-backend.onrender.com".to_string()),
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid API_TIMEOUT_SECS".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base for endpoint paths, without a trailing slash
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url.trim_end_matches('/'))
    }
}
