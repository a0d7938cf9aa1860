pub mod cart_repository;

pub use cart_repository::{CartRepository, StoredCartRepository};
