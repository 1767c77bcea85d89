//! Fluent construction of [`ClientConfig`]

use super::ClientConfig;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Configuration builder
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn credential_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.credential_dir = dir.into();
        self
    }

    pub fn notification_duration_ms(mut self, ms: u64) -> Self {
        self.config.notification_duration_ms = ms;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build without validation
    pub fn build(self) -> ClientConfig {
        self.config
    }

    /// Build and validate
    pub fn try_build(self) -> Result<ClientConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
