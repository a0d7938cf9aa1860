//! Taptaze grocery storefront client library
//!
//! This library provides the client-side core of the Taptaze storefront:
//! the persisted cart ledger, the unit/crate quantity calculator, favorites,
//! checkout, and typed clients for the storefront REST API.

pub mod client;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use modules::admin;
pub use modules::cart;
pub use modules::catalog;
pub use modules::favorites;
pub use modules::orders;
pub use state::AppState;
