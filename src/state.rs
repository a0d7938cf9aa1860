//! Application state owned by the UI layer.
//!
//! One `AppState` is built at startup and passed down explicitly; the cart
//! and favorites live here rather than in globals, so each test can build
//! its own isolated instance.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::core::{KeyValueStore, Result};
use crate::modules::admin::models::{AdminCredentials, AdminSession};
use crate::modules::admin::repositories::StoredAdminSessionRepository;
use crate::modules::admin::services::{AdminApi, AdminSessionService};
use crate::modules::cart::models::{PendingSelection, ResolvedLine};
use crate::modules::cart::repositories::StoredCartRepository;
use crate::modules::cart::services::{CartService, QuantityCalculator};
use crate::modules::catalog::models::Product;
use crate::modules::catalog::services::CatalogApi;
use crate::modules::favorites::repositories::StoredFavoritesRepository;
use crate::modules::favorites::services::FavoritesService;
use crate::modules::orders::models::{CustomerInfo, Order};
use crate::modules::orders::services::{CheckoutService, OrderApi};

/// Everything a storefront session needs
pub struct AppState {
    config: Config,
    catalog: Arc<dyn CatalogApi>,
    calculator: QuantityCalculator,
    cart: CartService,
    favorites: FavoritesService,
    checkout: CheckoutService,
    admin: AdminSessionService,
}

impl AppState {
    /// Build the production state: file-backed storage and the REST client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(config.storage.open_store());
        let api = Arc::new(ApiClient::new(&config.api)?);
        Ok(Self::assemble(config, store, api.clone(), api.clone(), api).await)
    }

    /// Build state over arbitrary ports and rehydrate cart, favorites and admin login
    pub async fn assemble(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogApi>,
        orders: Arc<dyn OrderApi>,
        admin: Arc<dyn AdminApi>,
    ) -> Self {
        let cart =
            CartService::load(Arc::new(StoredCartRepository::new(store.clone()))).await;
        let favorites =
            FavoritesService::load(Arc::new(StoredFavoritesRepository::new(store.clone()))).await;
        let admin =
            AdminSessionService::load(admin, Arc::new(StoredAdminSessionRepository::new(store)))
                .await;

        Self {
            calculator: QuantityCalculator::new(config.app.crate_size),
            config,
            catalog,
            cart,
            favorites,
            checkout: CheckoutService::new(orders),
            admin,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &dyn CatalogApi {
        self.catalog.as_ref()
    }

    pub fn calculator(&self) -> &QuantityCalculator {
        &self.calculator
    }

    pub fn cart(&self) -> &CartService {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartService {
        &mut self.cart
    }

    pub fn favorites(&self) -> &FavoritesService {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesService {
        &mut self.favorites
    }

    pub fn admin(&self) -> &AdminSessionService {
        &self.admin
    }

    pub async fn admin_login(&mut self, credentials: &AdminCredentials) -> Result<&AdminSession> {
        self.admin.login(credentials).await
    }

    pub async fn admin_logout(&mut self) {
        self.admin.logout().await;
    }

    /// Open a product view: fetch the product and seed a unit-mode selection
    pub async fn select_product(&self, product_id: &str) -> Result<PendingSelection> {
        let product = self.catalog.get_product(product_id).await?;
        Ok(self.calculator.select(product))
    }

    /// Resolve the selection and merge it into the cart
    ///
    /// # Errors
    ///
    /// Returns `AppError::Quantity` when the final quantity exceeds stock.
    pub async fn add_to_cart(&mut self, selection: &PendingSelection) -> Result<ResolvedLine> {
        Ok(self.cart.add_selection(&self.calculator, selection).await?)
    }

    /// Quick add from a listing or favorites: one base unit
    pub async fn quick_add(&mut self, product: &Product) {
        self.cart.add_item(product, None).await;
    }

    pub async fn favorite_products(&self) -> Result<Vec<Product>> {
        self.favorites.favorite_products(self.catalog.as_ref()).await
    }

    /// Submit the cart; cleared on success, untouched on failure
    pub async fn place_order(&mut self, customer: &CustomerInfo) -> Result<Order> {
        self.checkout.checkout(&mut self.cart, customer).await
    }
}
