use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::QuantityCalculator;
use crate::modules::cart::models::{
    Cart, CartLine, PendingSelection, QuantityError, ResolvedLine,
};
use crate::modules::cart::repositories::CartRepository;
use crate::modules::catalog::models::Product;

/// The cart ledger: in-memory cart plus best-effort persistence
///
/// Every mutation writes the full line list through the injected
/// [`CartRepository`]. Write failures are logged and swallowed; the
/// in-memory cart stays authoritative for the session. Writes are not
/// retried, and the most recent write wins.
pub struct CartService {
    cart: Cart,
    repository: Arc<dyn CartRepository>,
}

impl CartService {
    /// Create an empty ledger without touching storage
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self {
            cart: Cart::new(),
            repository,
        }
    }

    /// Create a ledger rehydrated from the last persisted snapshot
    pub async fn load(repository: Arc<dyn CartRepository>) -> Self {
        let mut service = Self::new(repository);
        service.rehydrate().await;
        service
    }

    /// Replace in-memory state with the persisted snapshot
    ///
    /// Absent or unreadable snapshots leave an empty cart.
    pub async fn rehydrate(&mut self) {
        self.cart = match self.repository.load().await {
            Ok(Some(lines)) => {
                let cart = Cart::from_lines(lines);
                info!(lines = cart.len(), total = %cart.total(), "Cart restored");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Stored cart unreadable, starting empty");
                Cart::new()
            }
        };
    }

    /// Merge `amount` (default 1) base units of `product` into the cart
    ///
    /// No stock check happens here; callers validate through the quantity
    /// calculator first. Non-positive amounts are ignored.
    pub async fn add_item(&mut self, product: &Product, amount: Option<Decimal>) {
        let amount = amount.unwrap_or(Decimal::ONE);
        if !self.cart.add(product, amount) {
            warn!(product_id = %product.id, amount = %amount, "Ignoring non-positive cart amount");
            return;
        }

        debug!(
            product_id = %product.id,
            amount = %amount,
            quantity = %self.cart.quantity_of(&product.id),
            "Added to cart"
        );
        self.persist().await;
    }

    /// Hand a resolved selection to the cart
    pub async fn add_resolved(&mut self, line: &ResolvedLine) {
        self.add_item(&line.product, Some(line.quantity)).await;
    }

    /// Resolve `selection` and add it; a hard stock rejection adds nothing
    pub async fn add_selection(
        &mut self,
        calculator: &QuantityCalculator,
        selection: &PendingSelection,
    ) -> Result<ResolvedLine, QuantityError> {
        let line = calculator.resolve_for_cart(selection)?;
        self.add_resolved(&line).await;
        Ok(line)
    }

    /// Remove the line for `product_id`; absent ids are a no-op
    pub async fn remove_item(&mut self, product_id: &str) {
        if self.cart.remove(product_id) {
            debug!(product_id = %product_id, "Removed from cart");
        }
        self.persist().await;
    }

    pub async fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("Cart cleared");
        self.persist().await;
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Derived from the current lines on every call
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.cart.contains(product_id)
    }

    pub fn quantity_of(&self, product_id: &str) -> Decimal {
        self.cart.quantity_of(product_id)
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.save(self.cart.lines()).await {
            warn!(error = %e, lines = self.cart.len(), "Failed to persist cart");
        }
    }
}
