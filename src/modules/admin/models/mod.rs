mod admin;

pub use admin::{AdminCredentials, AdminSession, AdminStats, ProductInput};
pub(crate) use admin::OrderStatusUpdate;
