pub mod favorites_service;

pub use favorites_service::FavoritesService;
