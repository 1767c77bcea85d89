//! Session teardown on rejected credentials

use super::middleware::{Middleware, Next};
use super::types::{ApiRequest, ApiResponse};
use crate::auth::session::SessionTeardown;
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Inspects the status after the call returns. A 401 on a standard call
/// ends the session; authentication calls pass through untouched so the
/// entry screen can show their error.
#[derive(Debug, Clone)]
pub struct SessionExpiry {
    teardown: SessionTeardown,
}

impl SessionExpiry {
    pub fn new(teardown: SessionTeardown) -> Self {
        Self { teardown }
    }
}

#[async_trait]
impl Middleware for SessionExpiry {
    async fn handle(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        let exempt = request.is_authentication();
        let path = request.path.clone();

        let response = next.run(request).await?;

        if response.is_unauthorized() {
            if exempt {
                debug!(path = %path, "401 on authentication call passed to caller");
            } else if self.teardown.expire() {
                debug!(path = %path, "401 ended the session");
            }
        }
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "session_expiry"
    }
}
