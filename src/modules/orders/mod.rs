// Orders module: checkout payloads and order submission

pub mod models;
pub mod services;

pub use models::{CreateOrderRequest, CustomerInfo, Order, OrderItem, OrderStatus};
pub use services::{CheckoutService, OrderApi};
