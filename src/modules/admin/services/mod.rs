pub mod admin_api;
pub mod admin_session_service;

pub use admin_api::AdminApi;
pub use admin_session_service::AdminSessionService;
