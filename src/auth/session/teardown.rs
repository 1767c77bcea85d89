//! Ending a session: explicit logout and server-signalled expiry

use super::state::SessionEvent;
use super::store::SessionStore;
use crate::auth::credential::CredentialStore;
use crate::auth::rbac::Resource;
use crate::navigation::Navigator;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// Clears the credential, resets the session and returns the user to the
/// entry screen. Shared by the logout path and the gateway's 401 handling.
#[derive(Debug, Clone)]
pub struct SessionTeardown {
    session: Arc<SessionStore>,
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    expiring: Arc<Mutex<()>>,
}

impl SessionTeardown {
    pub fn new(
        session: Arc<SessionStore>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            credentials,
            navigator,
            expiring: Arc::new(Mutex::new(())),
        }
    }

    /// React to a rejected credential on a regular call.
    ///
    /// Does nothing while the entry screen is showing. Otherwise the session
    /// ends, the stored credential is cleared and the navigator moves to the
    /// entry screen. This also applies when no session is live but a stale
    /// token is still stored. Once one rejection has done the teardown,
    /// concurrent rejections after it find nothing left to do.
    /// Returns `true` for the call that performed the teardown.
    pub fn expire(&self) -> bool {
        let entry = Resource::Entry.path();
        if Resource::from_path(&self.navigator.current_path()) == Some(Resource::Entry) {
            return false;
        }

        let _serial = self.expiring.lock();
        let ended = self.session.dispatch(SessionEvent::SessionExpired)
            || self.session.dispatch(SessionEvent::ErrorAcknowledged);
        let stale = match self.credentials.load() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!("credential store unreadable during expiry: {}", e);
                false
            }
        };
        if !ended && !stale {
            return false;
        }

        if let Err(e) = self.credentials.clear() {
            warn!("failed to clear credential after expiry: {}", e);
        }
        self.navigator.navigate(entry);
        info!("session expired; redirected to {}", entry);
        true
    }

    /// Explicit logout. Safe to call without a session.
    pub fn logout(&self) {
        if let Err(e) = self.credentials.clear() {
            warn!("failed to clear credential on logout: {}", e);
        }
        if self.session.dispatch(SessionEvent::LoggedOut) {
            info!("logged out");
        }
        self.navigator.navigate(Resource::Entry.path());
    }
}
