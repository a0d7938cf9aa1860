// Admin module: back-office product and order management, and the stored admin login

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AdminCredentials, AdminSession, AdminStats, ProductInput};
pub use repositories::{AdminSessionRepository, StoredAdminSessionRepository};
pub use services::{AdminApi, AdminSessionService};
