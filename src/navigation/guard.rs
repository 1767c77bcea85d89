//! Route gating based on the session and the access policy

use super::Navigator;
use crate::auth::rbac::{self, AccessDecision, Resource};
use crate::auth::session::{SessionState, SessionStore};
use std::sync::Arc;
use tracing::debug;

/// What the router should do with a requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the resource
    Allow(Resource),
    /// Session restoration still running; show a loading state
    Pending,
    /// Go somewhere else instead
    Redirect(Resource),
    /// Role is insufficient for the resource
    Denied(Resource),
    /// Unknown path
    NotFound,
}

/// Evaluates navigation attempts against the live session
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn resolve(&self, path: &str) -> RouteDecision {
        let Some(resource) = Resource::from_path(path) else {
            return RouteDecision::NotFound;
        };

        let state = self.session.snapshot();
        if let SessionState::Restoring = state {
            return RouteDecision::Pending;
        }

        match rbac::decide(state.user(), resource) {
            AccessDecision::Allow => RouteDecision::Allow(resource),
            AccessDecision::RedirectToEntry => RouteDecision::Redirect(Resource::Entry),
            AccessDecision::RedirectHome => RouteDecision::Redirect(Resource::Dashboard),
            AccessDecision::Deny => RouteDecision::Denied(resource),
        }
    }

    /// Resolve `path` and move the navigator accordingly.
    ///
    /// Denied resources are silently replaced by the dashboard; pending and
    /// unknown paths leave the navigator where it is.
    pub fn navigate(&self, path: &str) -> RouteDecision {
        let decision = self.resolve(path);
        debug!(path, ?decision, "route resolved");
        match decision {
            RouteDecision::Allow(resource) => self.navigator.navigate(resource.path()),
            RouteDecision::Redirect(target) => self.navigator.navigate(target.path()),
            RouteDecision::Denied(_) => self.navigator.navigate(Resource::Dashboard.path()),
            RouteDecision::Pending | RouteDecision::NotFound => {}
        }
        decision
    }

    /// Sidebar entries for the current session
    pub fn menu(&self) -> Vec<Resource> {
        rbac::navigable_resources(self.session.snapshot().user())
    }
}
