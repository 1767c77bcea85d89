//! Session states, events and the transition function

use crate::auth::types::User;
use serde::Serialize;
use std::fmt;

/// Process-wide session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    /// A persisted token is being validated at startup
    Restoring,
    Authenticated { user: User, token: String },
    /// Transient: a login or restore failed and the message is being surfaced
    Error { message: String },
}

/// Discriminant of [`SessionState`] without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Unauthenticated,
    Restoring,
    Authenticated,
    Error,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStatus::Unauthenticated => "unauthenticated",
            SessionStatus::Restoring => "restoring",
            SessionStatus::Authenticated => "authenticated",
            SessionStatus::Error => "error",
        };
        f.write_str(name)
    }
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionState::Unauthenticated => SessionStatus::Unauthenticated,
            SessionState::Restoring => SessionStatus::Restoring,
            SessionState::Authenticated { .. } => SessionStatus::Authenticated,
            SessionState::Error { .. } => SessionStatus::Error,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// True while startup validation is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Restoring)
    }
}

/// Everything that can move the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    RestoreStarted,
    RestoreSucceeded { user: User, token: String },
    RestoreFailed { message: String },
    LoginSucceeded { user: User, token: String },
    LoginFailed { message: String },
    /// The failure message was surfaced; return to the entry state
    ErrorAcknowledged,
    LoggedOut,
    /// The backend rejected the credential on a regular call
    SessionExpired,
    ProfileUpdated { user: User },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::RestoreStarted => "restore_started",
            SessionEvent::RestoreSucceeded { .. } => "restore_succeeded",
            SessionEvent::RestoreFailed { .. } => "restore_failed",
            SessionEvent::LoginSucceeded { .. } => "login_succeeded",
            SessionEvent::LoginFailed { .. } => "login_failed",
            SessionEvent::ErrorAcknowledged => "error_acknowledged",
            SessionEvent::LoggedOut => "logged_out",
            SessionEvent::SessionExpired => "session_expired",
            SessionEvent::ProfileUpdated { .. } => "profile_updated",
        }
    }
}

/// Apply `event` to `state`.
///
/// Returns `None` when the event is not valid in the current state; the
/// caller keeps the old state. Never partially authenticates.
pub fn transition(state: &SessionState, event: SessionEvent) -> Option<SessionState> {
    use SessionEvent as E;
    use SessionState as S;

    match (state, event) {
        (S::Unauthenticated, E::RestoreStarted) => Some(S::Restoring),
        (S::Restoring, E::RestoreSucceeded { user, token }) => {
            Some(S::Authenticated { user, token })
        }
        (S::Restoring, E::RestoreFailed { message }) => Some(S::Error { message }),

        (
            S::Unauthenticated | S::Error { .. } | S::Authenticated { .. },
            E::LoginSucceeded { user, token },
        ) => Some(S::Authenticated { user, token }),
        (S::Unauthenticated | S::Error { .. }, E::LoginFailed { message }) => {
            Some(S::Error { message })
        }
        (S::Error { .. }, E::ErrorAcknowledged) => Some(S::Unauthenticated),

        (S::Authenticated { .. } | S::Error { .. }, E::LoggedOut) => Some(S::Unauthenticated),
        (S::Authenticated { .. } | S::Restoring, E::SessionExpired) => Some(S::Unauthenticated),

        (S::Authenticated { user: current, token }, E::ProfileUpdated { user })
            if current.id == user.id =>
        {
            Some(S::Authenticated {
                user,
                token: token.clone(),
            })
        }

        _ => None,
    }
}
