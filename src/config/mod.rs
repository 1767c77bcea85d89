//! Client configuration
//!
//! Values come from defaults, a YAML file, `DEFECT_*` environment variables
//! or the fluent [`ConfigBuilder`], in any combination.

mod builder;
mod loader;

pub use builder::ConfigBuilder;
pub use loader::{ENV_API_URL, ENV_CREDENTIAL_DIR, ENV_NOTIFICATION_MS, ENV_TIMEOUT_SECS};

use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;
const CREDENTIAL_DIR_NAME: &str = ".defect-tracker";

/// Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Directory holding the persisted credential
    pub credential_dir: PathBuf,
    /// Default notification lifetime in milliseconds
    pub notification_duration_ms: u64,
    /// `User-Agent` sent with every call
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credential_dir: default_credential_dir(),
            notification_duration_ms: DEFAULT_NOTIFICATION_MS,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Validate
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ClientError::config(format!("Invalid api_url '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::config(format!(
                "api_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::config("timeout_secs must be greater than 0"));
        }
        if self.notification_duration_ms == 0 {
            return Err(ClientError::config(
                "notification_duration_ms must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// `$HOME/.defect-tracker`, falling back to the working directory
fn default_credential_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CREDENTIAL_DIR_NAME)
}
