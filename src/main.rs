use taptaze::catalog::CatalogApi;
use taptaze::config::Config;
use taptaze::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize tracing
    let log_json = config.app.log_json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("taptaze={}", config.app.log_level).into()),
        )
        .with(log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Taptaze storefront client");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("API: {}", config.api.api_root());
    tracing::info!("Storage: {}", config.storage.dir.display());

    let currency = config.app.currency;
    let state = AppState::new(config).await?;

    tracing::info!(
        lines = state.cart().item_count(),
        total = %currency.format_amount(state.cart().total()),
        favorites = state.favorites().len(),
        admin = state.admin().username().unwrap_or("-"),
        "Session restored"
    );

    match state.catalog().list_categories().await {
        Ok(categories) => {
            for category in &categories {
                tracing::info!(id = %category.id, name = %category.name, "Category");
            }
        }
        Err(e) => tracing::warn!(
            error = %e,
            retryable = e.is_retryable(),
            "Could not load categories"
        ),
    }

    Ok(())
}
