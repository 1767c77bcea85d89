//! Static access table and its evaluation

use super::types::{AccessDecision, AccessRule, Action, Resource, Role};
use crate::auth::types::User;

const USER_MANAGERS: &[Role] = &[Role::Manager, Role::Admin];
const ADMINS: &[Role] = &[Role::Admin];

/// Page-level rules
pub const RESOURCE_RULES: &[(Resource, AccessRule)] = &[
    (Resource::Entry, AccessRule::Anonymous),
    (Resource::Dashboard, AccessRule::Authenticated),
    (Resource::Projects, AccessRule::Authenticated),
    (Resource::Defects, AccessRule::Authenticated),
    (Resource::Reports, AccessRule::Authenticated),
    (Resource::Users, AccessRule::Roles(USER_MANAGERS)),
    (Resource::Profile, AccessRule::Authenticated),
];

/// UI-level rules, narrower than page access
pub const ACTION_RULES: &[(Action, AccessRule)] = &[
    (Action::CreateProject, AccessRule::Roles(&[Role::Manager, Role::Admin])),
    (
        Action::UpdateDefectStatus,
        AccessRule::Roles(&[Role::Engineer, Role::Manager, Role::Admin]),
    ),
    (Action::CreateUser, AccessRule::Roles(USER_MANAGERS)),
    (Action::ChangeUserRole, AccessRule::Roles(ADMINS)),
    (Action::DeleteUser, AccessRule::Roles(ADMINS)),
];

/// Lookup facade over the static tables
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn resource_rule(resource: Resource) -> AccessRule {
        RESOURCE_RULES
            .iter()
            .find(|(r, _)| *r == resource)
            .map(|(_, rule)| *rule)
            .unwrap_or(AccessRule::Roles(&[]))
    }

    pub fn action_rule(action: Action) -> AccessRule {
        ACTION_RULES
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, rule)| *rule)
            .unwrap_or(AccessRule::Roles(&[]))
    }
}

/// Evaluate a navigation attempt
pub fn decide(user: Option<&User>, resource: Resource) -> AccessDecision {
    let rule = AccessPolicy::resource_rule(resource);
    match (user, rule) {
        (None, AccessRule::Anonymous) => AccessDecision::Allow,
        (None, _) => AccessDecision::RedirectToEntry,
        (Some(_), AccessRule::Anonymous) => AccessDecision::RedirectHome,
        (Some(user), rule) if rule.admits(user.role) => AccessDecision::Allow,
        (Some(_), _) => AccessDecision::Deny,
    }
}

pub fn can_access(user: Option<&User>, resource: Resource) -> bool {
    decide(user, resource) == AccessDecision::Allow
}

pub fn can_perform(user: Option<&User>, action: Action) -> bool {
    user.is_some_and(|user| AccessPolicy::action_rule(action).admits(user.role))
}

/// Sidebar entries visible to `user`
pub fn navigable_resources(user: Option<&User>) -> Vec<Resource> {
    match user {
        None => Vec::new(),
        Some(_) => Resource::NAVIGATION
            .into_iter()
            .filter(|resource| can_access(user, *resource))
            .collect(),
    }
}
