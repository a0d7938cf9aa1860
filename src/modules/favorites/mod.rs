// Favorites module: product ids the shopper has starred

pub mod repositories;
pub mod services;

pub use repositories::{FavoritesRepository, StoredFavoritesRepository};
pub use services::FavoritesService;
