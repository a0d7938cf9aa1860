// Catalog module: categories and products served by the storefront API

pub mod models;
pub mod services;

pub use models::{Category, Product, ProductQuery, UnitType};
pub use services::CatalogApi;
