//! Error types for the client

use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message shown when the backend could not be reached at all
pub const CONNECTION_MESSAGE: &str = "Unable to connect to the server";

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend rejected the bearer credential (HTTP 401)
    #[error("Unauthorized: {detail}")]
    Unauthorized { detail: String },

    /// Malformed input rejected by the backend (HTTP 400/422)
    #[error("Validation error: {detail}")]
    Validation { status: u16, detail: String },

    /// Backend (HTTP 403) or local access policy denial
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success response
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// No response was received
    #[error("Connection error: {0}")]
    Connection(String),

    /// Credential store failures
    #[error("Credential storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
