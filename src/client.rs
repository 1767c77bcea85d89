//! Composition root wiring the session core together

use crate::auth::SessionManager;
use crate::auth::credential::{CredentialStore, FileCredentialStore};
use crate::auth::session::{SessionState, SessionStore, SessionTeardown};
use crate::config::ClientConfig;
use crate::gateway::{Gateway, ReqwestTransport, Transport};
use crate::navigation::{HistoryNavigator, Navigator, RouteGuard};
use crate::notifications::NotificationCenter;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// One client instance: a single session, gateway and notification queue.
///
/// Everything is owned here and handed to consumers by reference; nothing is
/// process-global.
#[derive(Debug)]
pub struct DefectClient {
    config: ClientConfig,
    credentials: Arc<dyn CredentialStore>,
    session: Arc<SessionStore>,
    notifications: Arc<NotificationCenter>,
    navigator: Arc<dyn Navigator>,
    manager: SessionManager,
    guard: RouteGuard,
}

impl DefectClient {
    /// Build with a file-backed credential store, an in-memory navigator and
    /// the `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.api_url, config.timeout(), &config.user_agent)?;
        let credentials = FileCredentialStore::new(config.credential_dir.clone());
        Self::with_parts(
            config,
            Arc::new(credentials),
            Arc::new(HistoryNavigator::default()),
            Arc::new(transport),
        )
    }

    /// Build from explicit collaborators
    pub fn with_parts(
        config: ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.validate()?;

        let session = Arc::new(SessionStore::new());
        let notifications = Arc::new(NotificationCenter::with_default_duration(
            config.notification_duration(),
        ));
        let teardown = SessionTeardown::new(session.clone(), credentials.clone(), navigator.clone());
        let gateway = Gateway::standard(transport, credentials.clone(), teardown);
        let manager = SessionManager::new(
            gateway,
            credentials.clone(),
            session.clone(),
            notifications.clone(),
            navigator.clone(),
        );
        let guard = RouteGuard::new(session.clone(), navigator.clone());

        info!(api_url = %config.api_url, "client created");

        Ok(Self {
            config,
            credentials,
            session,
            notifications,
            navigator,
            manager,
            guard,
        })
    }

    /// Run startup restoration; safe to call repeatedly
    pub async fn start(&self) -> SessionState {
        self.manager.restore().await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth(&self) -> &SessionManager {
        &self.manager
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn routes(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn gateway(&self) -> &Gateway {
        self.manager.gateway()
    }
}
