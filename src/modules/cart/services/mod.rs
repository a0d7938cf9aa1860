pub mod cart_service;
pub mod quantity_calculator;

pub use cart_service::CartService;
pub use quantity_calculator::{QuantityCalculator, DEFAULT_CRATE_SIZE};
