// Cart module: the cart ledger and the per-product quantity calculator

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Cart, CartLine, PendingSelection, PurchaseMode, QuantityError, ResolvedLine};
pub use repositories::{CartRepository, StoredCartRepository};
pub use services::{CartService, QuantityCalculator};
