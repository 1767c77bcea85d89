//! Access policy type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of user roles, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Observer,
    Engineer,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Observer, Role::Engineer, Role::Manager, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Observer => "observer",
            Role::Engineer => "engineer",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "observer" => Ok(Role::Observer),
            "engineer" => Ok(Role::Engineer),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Navigable screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Login / registration screen
    Entry,
    Dashboard,
    Projects,
    Defects,
    Reports,
    Users,
    Profile,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Entry,
        Resource::Dashboard,
        Resource::Projects,
        Resource::Defects,
        Resource::Reports,
        Resource::Users,
        Resource::Profile,
    ];

    /// Sidebar order for authenticated users
    pub const NAVIGATION: [Resource; 6] = [
        Resource::Dashboard,
        Resource::Projects,
        Resource::Defects,
        Resource::Reports,
        Resource::Users,
        Resource::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Resource::Entry => "/login",
            Resource::Dashboard => "/dashboard",
            Resource::Projects => "/projects",
            Resource::Defects => "/defects",
            Resource::Reports => "/reports",
            Resource::Users => "/users",
            Resource::Profile => "/profile",
        }
    }

    /// Resolve a route path; the root path lands on the dashboard
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Resource::Dashboard);
        }
        Resource::ALL.into_iter().find(|r| r.path() == trimmed)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Role-gated affordances inside otherwise reachable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreateProject,
    UpdateDefectStatus,
    CreateUser,
    ChangeUserRole,
    DeleteUser,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::CreateProject,
        Action::UpdateDefectStatus,
        Action::CreateUser,
        Action::ChangeUserRole,
        Action::DeleteUser,
    ];
}

/// Requirement attached to a resource or action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRule {
    /// Only reachable without a session (login / registration)
    Anonymous,
    /// Any authenticated user
    Authenticated,
    /// Authenticated users holding one of the listed roles
    Roles(&'static [Role]),
}

impl AccessRule {
    pub fn admits(&self, role: Role) -> bool {
        match self {
            AccessRule::Anonymous => false,
            AccessRule::Authenticated => true,
            AccessRule::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Outcome of evaluating a resource for a (possibly absent) user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No session: send the user to the entry screen
    RedirectToEntry,
    /// Session present but the entry screen was requested
    RedirectHome,
    /// Session present but the role is insufficient
    Deny,
}
