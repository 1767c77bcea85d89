//! File and environment sources

use super::ClientConfig;
use crate::utils::error::{ClientError, Result};
use std::path::Path;
use tracing::debug;

pub const ENV_API_URL: &str = "DEFECT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "DEFECT_TIMEOUT_SECS";
pub const ENV_CREDENTIAL_DIR: &str = "DEFECT_CREDENTIAL_DIR";
pub const ENV_NOTIFICATION_MS: &str = "DEFECT_NOTIFICATION_MS";

impl ClientConfig {
    /// Load from a YAML file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;

        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults overridden by `DEFECT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable lookup, then validate
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(dir) = lookup(ENV_CREDENTIAL_DIR) {
            self.credential_dir = dir.into();
        }
        if let Some(raw) = lookup(ENV_NOTIFICATION_MS) {
            self.notification_duration_ms = parse_number(ENV_NOTIFICATION_MS, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::config(format!("{} must be a whole number, got '{}'", key, raw)))
}
