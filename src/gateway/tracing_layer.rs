//! Request id and timing

use super::middleware::{Middleware, Next};
use super::types::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags each call with a fresh UUID and logs its outcome
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

#[async_trait]
impl Middleware for RequestTracing {
    async fn handle(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        let request_id = Uuid::new_v4().to_string();
        let method = request.method.clone();
        let path = request.path.clone();
        let request = request.with_header(REQUEST_ID_HEADER, request_id.clone());

        let started = Instant::now();
        let result = next.run(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => debug!(
                %request_id, %method, %path, status = response.status, elapsed_ms,
                "request completed"
            ),
            Err(e) => warn!(
                %request_id, %method, %path, elapsed_ms,
                "request failed: {}", e
            ),
        }
        result
    }

    fn name(&self) -> &'static str {
        "request_tracing"
    }
}
