//! Authentication and authorization
//!
//! Credential persistence, the session state machine, the role-based access
//! policy and the [`SessionManager`] that drives login, restoration and
//! logout on top of them.

pub mod credential;
pub mod rbac;
pub mod session;
pub mod types;

mod service;

pub use service::{
    LOGIN_SUCCESS_MESSAGE, LOGOUT_MESSAGE, PROFILE_UPDATED_MESSAGE, REGISTER_SUCCESS_MESSAGE,
    ROLE_UPDATED_MESSAGE, SessionManager, USER_DELETED_MESSAGE,
};
pub use types::{RegisterRequest, TokenResponse, User, UserId, UserUpdate};
