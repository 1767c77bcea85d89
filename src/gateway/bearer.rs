//! Attaches the stored credential to outgoing calls

use super::middleware::{Middleware, Next};
use super::types::{ApiRequest, ApiResponse};
use crate::auth::credential::CredentialStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Reads the credential store on every call; a request that already carries
/// an explicit bearer is left alone.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    credentials: Arc<dyn CredentialStore>,
}

impl BearerAuth {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl Middleware for BearerAuth {
    async fn handle(&self, mut request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        if request.bearer.is_none() {
            match self.credentials.load() {
                Ok(token) => request.bearer = token,
                // An unreadable store degrades to an unauthenticated call
                Err(e) => warn!("credential store unreadable, sending without token: {}", e),
            }
        }
        next.run(request).await
    }

    fn name(&self) -> &'static str {
        "bearer_auth"
    }
}
