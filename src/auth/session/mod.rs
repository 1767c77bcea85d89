//! Session state and its transitions
//!
//! [`SessionState`] is a tagged union whose variants carry exactly the data
//! valid in that state, so "token present iff authenticated" holds by
//! construction. All mutation goes through [`SessionStore::dispatch`], which
//! applies the pure [`transition`] function under a single lock.

mod state;
mod store;
mod teardown;

pub use state::{SessionEvent, SessionState, SessionStatus, transition};
pub use store::{SessionStore, SessionTransition};
pub use teardown::SessionTeardown;
