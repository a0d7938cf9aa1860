pub mod favorites_repository;

pub use favorites_repository::{FavoritesRepository, StoredFavoritesRepository};
