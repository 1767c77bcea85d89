//! In-memory credential store

use super::CredentialStore;
use crate::utils::error::Result;
use parking_lot::Mutex;

/// Non-durable store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn clear(&self) -> Result<()> {
        self.token.lock().take();
        Ok(())
    }
}
