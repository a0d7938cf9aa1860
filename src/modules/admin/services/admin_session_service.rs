use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::admin::models::{AdminCredentials, AdminSession};
use crate::modules::admin::repositories::AdminSessionRepository;
use crate::modules::admin::services::AdminApi;

/// The admin login kept across restarts
///
/// Login goes through [`AdminApi`]; the resulting session is stored
/// best-effort like the cart, so a storage failure only costs a re-login
/// on the next start.
pub struct AdminSessionService {
    session: Option<AdminSession>,
    api: Arc<dyn AdminApi>,
    repository: Arc<dyn AdminSessionRepository>,
}

impl AdminSessionService {
    pub fn new(api: Arc<dyn AdminApi>, repository: Arc<dyn AdminSessionRepository>) -> Self {
        Self {
            session: None,
            api,
            repository,
        }
    }

    /// Create the service with any session stored by a previous run
    pub async fn load(api: Arc<dyn AdminApi>, repository: Arc<dyn AdminSessionRepository>) -> Self {
        let mut service = Self::new(api, repository);
        service.rehydrate().await;
        service
    }

    pub async fn rehydrate(&mut self) {
        self.session = match self.repository.load().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Stored admin session unreadable, logged out");
                None
            }
        };
    }

    pub fn current(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Back-office operations; callers gate them on [`Self::is_logged_in`]
    pub fn api(&self) -> &dyn AdminApi {
        self.api.as_ref()
    }

    /// Log in and remember the username
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` for wrong credentials. The current
    /// session, if any, is kept on failure.
    pub async fn login(&mut self, credentials: &AdminCredentials) -> Result<&AdminSession> {
        let session = self.api.login(credentials).await?;

        if let Err(e) = self.repository.save(&session).await {
            warn!(error = %e, "Failed to persist admin session");
        }
        info!(username = %session.username, "Admin session started");

        let session: &AdminSession = self.session.insert(session);
        Ok(session)
    }

    /// Forget the session, in memory and on the device
    pub async fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(username = %session.username, "Admin logged out");
        }
        if let Err(e) = self.repository.clear().await {
            warn!(error = %e, "Failed to remove stored admin session");
        }
    }
}
