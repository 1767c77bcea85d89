//! Durable storage for the bearer credential
//!
//! Exactly one value is persisted: the bearer token as a plain string.
//! Absence means unauthenticated. Nothing here checks expiry; a stale token
//! is only discovered when the backend rejects it.

mod file;
mod memory;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

use crate::utils::error::Result;

/// Key under which the token is persisted
pub const TOKEN_KEY: &str = "token";

/// Synchronous key/value persistence for the bearer token
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Persist `token`, replacing any previous value
    fn save(&self, token: &str) -> Result<()>;

    /// Load the persisted token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Remove the persisted token; succeeds when nothing is stored
    fn clear(&self) -> Result<()>;
}
