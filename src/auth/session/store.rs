//! Injectable, observable session container

use super::state::{SessionEvent, SessionState, SessionStatus, transition};
use crate::auth::types::User;
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info};

const TRANSITION_CHANNEL_CAPACITY: usize = 64;

/// A transition that was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTransition {
    pub from: SessionStatus,
    pub to: SessionState,
}

/// Owns the single session state of a client instance.
///
/// Consumers receive it by reference (usually `Arc<SessionStore>`); there is
/// no global instance.
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionState>,
    transitions: broadcast::Sender<SessionTransition>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (transitions, _) = broadcast::channel(TRANSITION_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(SessionState::Unauthenticated),
            transitions,
        }
    }

    /// Apply an event. Returns `true` when the state changed.
    ///
    /// The check and the write happen under one lock, so of several racing
    /// identical events exactly one wins.
    pub fn dispatch(&self, event: SessionEvent) -> bool {
        let name = event.name();
        let mut state = self.state.write();
        let from = state.status();

        match transition(&state, event) {
            Some(next) => {
                let to = next.status();
                *state = next.clone();
                // Sent under the lock so subscribers observe transitions in order
                let _ = self.transitions.send(SessionTransition { from, to: next });
                drop(state);
                info!(event = name, %from, %to, "session transition");
                true
            }
            None => {
                debug!(event = name, state = %from, "session event ignored");
                false
            }
        }
    }

    /// Receive every subsequent transition
    pub fn subscribe(&self) -> broadcast::Receiver<SessionTransition> {
        self.transitions.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.read().status()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
