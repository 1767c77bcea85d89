//! Constructors and classification helpers

use super::types::{CONNECTION_MESSAGE, ClientError};

impl ClientError {
    pub fn unauthorized<S: Into<String>>(detail: S) -> Self {
        Self::Unauthorized {
            detail: detail.into(),
        }
    }

    pub fn validation<S: Into<String>>(status: u16, detail: S) -> Self {
        Self::Validation {
            status,
            detail: detail.into(),
        }
    }

    pub fn forbidden<S: Into<String>>(detail: S) -> Self {
        Self::Forbidden(detail.into())
    }

    pub fn api<S: Into<String>>(status: u16, detail: S) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    pub fn connection<S: Into<String>>(message: S) -> Self {
        Self::Connection(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Map an HTTP status and extracted detail onto the error taxonomy
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 => Self::Unauthorized { detail },
            400 | 422 => Self::Validation { status, detail },
            403 => Self::Forbidden(detail),
            404 => Self::NotFound(detail),
            _ => Self::Api { status, detail },
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Validation { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Backend-provided `detail`, verbatim
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail }
            | Self::Validation { detail, .. }
            | Self::Api { detail, .. }
            | Self::Forbidden(detail)
            | Self::NotFound(detail) => Some(detail),
            _ => None,
        }
    }

    /// Message suitable for direct display on the entry screen or in a toast
    pub fn display_message(&self) -> String {
        match self {
            Self::Connection(_) => CONNECTION_MESSAGE.to_string(),
            other => other
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        }
    }

    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
