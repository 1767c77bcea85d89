//! Thin wrappers over the backend endpoints used by the session core
//!
//! Each wrapper borrows the shared [`Gateway`](crate::gateway::Gateway) and
//! maps one endpoint to one method. Policy and session bookkeeping live in
//! [`SessionManager`](crate::auth::SessionManager), not here.

mod auth;
mod users;

pub use auth::AuthApi;
pub use users::UsersApi;
