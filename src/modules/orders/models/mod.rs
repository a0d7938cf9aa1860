mod order;

pub use order::{CreateOrderRequest, CustomerInfo, Order, OrderItem, OrderStatus};
