//! File-backed credential store

use super::{CredentialStore, TOKEN_KEY};
use crate::utils::error::{ClientError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the token as a single file named after [`TOKEN_KEY`] inside a
/// directory. Survives process restarts.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, token: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ClientError::storage(format!(
                "failed to create credential directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        // Write-then-rename so a crash never leaves a truncated token behind
        let staging = self.dir.join(format!(".{}.tmp", TOKEN_KEY));
        fs::write(&staging, token)
            .map_err(|e| ClientError::storage(format!("failed to write token: {}", e)))?;
        fs::rename(&staging, self.token_path())
            .map_err(|e| ClientError::storage(format!("failed to persist token: {}", e)))?;

        debug!(dir = %self.dir.display(), "credential saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.token_path()) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::storage(format!("failed to read token: {}", e))),
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => {
                debug!(dir = %self.dir.display(), "credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::storage(format!("failed to remove token: {}", e))),
        }
    }
}
