//! Session flows: login, restoration, logout and account operations

use super::credential::CredentialStore;
use super::rbac::{self, Action, Resource, Role};
use super::session::{SessionEvent, SessionState, SessionStatus, SessionStore, SessionTeardown};
use super::types::{RegisterRequest, User, UserId, UserUpdate};
use crate::api::{AuthApi, UsersApi};
use crate::gateway::Gateway;
use crate::navigation::Navigator;
use crate::notifications::NotificationCenter;
use crate::utils::error::{ClientError, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, warn};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Signed in successfully";
pub const LOGOUT_MESSAGE: &str = "You have been signed out";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful. You can now sign in.";
pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated";
pub const ROLE_UPDATED_MESSAGE: &str = "User role updated";
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// Drives every flow that writes the session.
///
/// Login and restoration hold the same async lock, so at most one of them is
/// in flight. Restoration runs at most once per instance; later calls return
/// the cached outcome.
#[derive(Debug)]
pub struct SessionManager {
    gateway: Gateway,
    credentials: Arc<dyn CredentialStore>,
    session: Arc<SessionStore>,
    notifications: Arc<NotificationCenter>,
    navigator: Arc<dyn Navigator>,
    teardown: SessionTeardown,
    restored: OnceCell<()>,
    flow: Mutex<()>,
}

impl SessionManager {
    pub fn new(
        gateway: Gateway,
        credentials: Arc<dyn CredentialStore>,
        session: Arc<SessionStore>,
        notifications: Arc<NotificationCenter>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let teardown = SessionTeardown::new(session.clone(), credentials.clone(), navigator.clone());
        Self {
            gateway,
            credentials,
            session,
            notifications,
            navigator,
            teardown,
            restored: OnceCell::new(),
            flow: Mutex::new(()),
        }
    }

    // ==================== Restoration ====================

    /// Turn a persisted token into a validated session.
    ///
    /// Validation happens on the first call only; every call returns the
    /// live session state.
    pub async fn restore(&self) -> SessionState {
        self.restored
            .get_or_init(|| self.validate_stored_credential())
            .await;
        self.session.snapshot()
    }

    /// Whether the startup restoration has finished
    pub fn is_restored(&self) -> bool {
        self.restored.initialized()
    }

    async fn validate_stored_credential(&self) {
        let _flow = self.flow.lock().await;

        let token = match self.credentials.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("no stored credential; skipping restore");
                return;
            }
            Err(e) => {
                warn!("credential store unreadable, skipping restore: {}", e);
                return;
            }
        };

        if !self.session.dispatch(SessionEvent::RestoreStarted) {
            debug!(status = %self.session.status(), "session already established; skipping restore");
            return;
        }

        match AuthApi::new(&self.gateway).me().await {
            Ok(user) => {
                info!(user = %user.username, role = %user.role, "session restored");
                self.session
                    .dispatch(SessionEvent::RestoreSucceeded { user, token });
            }
            Err(e) => {
                if let Err(clear_err) = self.credentials.clear() {
                    warn!("failed to clear rejected credential: {}", clear_err);
                }
                if e.is_credential_error() {
                    debug!("stored credential rejected");
                } else {
                    warn!("session restore failed: {}", e);
                    self.notifications.error(e.display_message());
                }
                // A 401 has usually torn the session down already
                if self
                    .session
                    .dispatch(SessionEvent::RestoreFailed { message: e.display_message() })
                {
                    self.session.dispatch(SessionEvent::ErrorAcknowledged);
                }
            }
        }
    }

    // ==================== Login / Logout ====================

    /// Authenticate with username and password.
    ///
    /// On success the token is persisted, the session becomes authenticated
    /// and the navigator moves to the dashboard. On failure the error is
    /// returned exactly as the backend described it; an already active
    /// session is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let _flow = self.flow.lock().await;

        match self.authenticate(username, password).await {
            Ok((user, token)) => {
                self.session.dispatch(SessionEvent::LoginSucceeded {
                    user: user.clone(),
                    token,
                });
                info!(user = %user.username, role = %user.role, "logged in");
                self.notifications.success(LOGIN_SUCCESS_MESSAGE);
                self.navigator.navigate(Resource::Dashboard.path());
                Ok(user)
            }
            Err(e) => {
                warn!(username, "login failed: {}", e);
                let message = e.display_message();
                if !self.session.is_authenticated() {
                    self.session.dispatch(SessionEvent::LoginFailed {
                        message: message.clone(),
                    });
                    self.session.dispatch(SessionEvent::ErrorAcknowledged);
                }
                self.notifications.error(message);
                Err(e)
            }
        }
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<(User, String)> {
        let auth = AuthApi::new(&self.gateway);
        let token = auth.login(username, password).await?.access_token;
        let user = auth.me_with_token(&token).await?;
        self.credentials.save(&token)?;
        Ok((user, token))
    }

    /// End the session explicitly. Safe without an active session.
    ///
    /// Waits for an in-flight login or restoration to finish first.
    pub async fn logout(&self) {
        let _flow = self.flow.lock().await;
        let was_authenticated = self.session.is_authenticated();
        self.teardown.logout();
        if was_authenticated {
            self.notifications.info(LOGOUT_MESSAGE);
        }
    }

    /// Create an account. Never changes the session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<User>> {
        match AuthApi::new(&self.gateway).register(request).await {
            Ok(user) => {
                info!(username = %request.username, role = %request.role, "registered");
                self.notifications.success(REGISTER_SUCCESS_MESSAGE);
                Ok(user)
            }
            Err(e) => {
                warn!(username = %request.username, "registration failed: {}", e);
                self.notifications.error(e.display_message());
                Err(e)
            }
        }
    }

    // ==================== Account Operations ====================

    /// Update the signed-in user's own profile and refresh the snapshot
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<User> {
        let current = self.require_resource(Resource::Profile)?;
        if update.is_empty() {
            return Ok(current);
        }

        let user = self.report(UsersApi::new(&self.gateway).update_me(update).await)?;
        self.session.dispatch(SessionEvent::ProfileUpdated { user: user.clone() });
        self.notifications.success(PROFILE_UPDATED_MESSAGE);
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.require_resource(Resource::Users)?;
        self.report(UsersApi::new(&self.gateway).list().await)
    }

    /// Change another user's role (admin only)
    pub async fn change_user_role(&self, id: UserId, role: Role) -> Result<User> {
        let current = self.require_action(Action::ChangeUserRole)?;
        let user = self.report(UsersApi::new(&self.gateway).update_role(id, role).await)?;
        if user.id == current.id {
            self.session.dispatch(SessionEvent::ProfileUpdated { user: user.clone() });
        }
        info!(target_user = id, %role, "role changed");
        self.notifications.success(ROLE_UPDATED_MESSAGE);
        Ok(user)
    }

    /// Delete a user (admin only)
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        self.require_action(Action::DeleteUser)?;
        self.report(UsersApi::new(&self.gateway).delete(id).await)?;
        info!(target_user = id, "user deleted");
        self.notifications.success(USER_DELETED_MESSAGE);
        Ok(())
    }

    fn require_resource(&self, resource: Resource) -> Result<User> {
        let user = self.session.current_user();
        match user {
            Some(user) if rbac::can_access(Some(&user), resource) => Ok(user),
            _ => {
                debug!(%resource, "access denied by policy");
                Err(ClientError::forbidden(format!("Access to {} is not permitted", resource)))
            }
        }
    }

    fn require_action(&self, action: Action) -> Result<User> {
        let user = self.session.current_user();
        match user {
            Some(user) if rbac::can_perform(Some(&user), action) => Ok(user),
            _ => {
                debug!(?action, "action denied by policy");
                Err(ClientError::forbidden("You do not have permission to perform this action"))
            }
        }
    }

    /// Surface a failed call as a notification. Credential errors are
    /// already handled by the gateway's teardown and stay quiet.
    fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if !e.is_credential_error() {
                self.notifications.error(e.display_message());
            }
        }
        result
    }

    // ==================== Accessors ====================

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn can_access(&self, resource: Resource) -> bool {
        rbac::can_access(self.session.current_user().as_ref(), resource)
    }

    pub fn can_perform(&self, action: Action) -> bool {
        rbac::can_perform(self.session.current_user().as_ref(), action)
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn teardown(&self) -> &SessionTeardown {
        &self.teardown
    }
}
