use crate::core::{AppError, Currency, Result};
use serde::Deserialize;
use std::env;

pub mod api;
pub mod storage;

pub use api::ApiConfig;
pub use storage::StorageConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable text
    pub log_json: bool,
    pub currency: Currency,
    /// Base units per crate in crate purchase mode
    pub crate_size: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_json: env::var("LOG_FORMAT")
                    .map(|f| f.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
                currency: env::var("CURRENCY")
                    .unwrap_or_else(|_| "TRY".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
                crate_size: env::var("CRATE_SIZE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid CRATE_SIZE".to_string()))?,
            },
            api: ApiConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.crate_size == 0 {
            return Err(AppError::Configuration(
                "Crate size must be greater than 0".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(AppError::Configuration(format!(
                "API base URL must be http(s): {}",
                self.api.base_url
            )));
        }

        Ok(())
    }
}
