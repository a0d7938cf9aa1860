use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::cart::services::CartService;
use crate::modules::orders::models::{CreateOrderRequest, CustomerInfo, Order};
use crate::modules::orders::services::OrderApi;

/// Turns the cart into an order submission
pub struct CheckoutService {
    orders: Arc<dyn OrderApi>,
}

impl CheckoutService {
    pub fn new(orders: Arc<dyn OrderApi>) -> Self {
        Self { orders }
    }

    /// Build the payload from the cart's current lines and total
    pub fn build_order(cart: &CartService, customer: &CustomerInfo) -> Result<CreateOrderRequest> {
        CreateOrderRequest::from_cart(cart.items(), cart.total(), customer)
    }

    /// Submit the cart as an order
    ///
    /// The cart is cleared only after the API accepts the order. On any
    /// failure the cart is left exactly as it was so the shopper can retry.
    pub async fn checkout(&self, cart: &mut CartService, customer: &CustomerInfo) -> Result<Order> {
        let request = Self::build_order(cart, customer)?;

        match self.orders.create_order(&request).await {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    items = order.items.len(),
                    total = %order.total_amount,
                    "Order placed"
                );
                cart.clear_cart().await;
                Ok(order)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    items = request.items.len(),
                    "Order submission failed"
                );
                Err(e)
            }
        }
    }
}
