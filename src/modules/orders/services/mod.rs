pub mod checkout_service;
pub mod order_api;

pub use checkout_service::CheckoutService;
pub use order_api::OrderApi;
