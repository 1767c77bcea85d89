//! Role-based access policy
//!
//! One static table maps every navigable resource and every role-gated UI
//! action to the roles allowed to reach it. Evaluation is pure: the same
//! `(role, resource)` pair always yields the same answer.

mod policy;
mod types;

pub use policy::{
    ACTION_RULES, AccessPolicy, RESOURCE_RULES, can_access, can_perform, decide,
    navigable_resources,
};
pub use types::{AccessDecision, AccessRule, Action, Resource, Role};
