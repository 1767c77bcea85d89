//! Middleware chain
//!
//! Each middleware receives the request and a [`Next`] handle to the rest of
//! the chain, so it can act before sending, after receiving, or both.

use super::transport::Transport;
use super::types::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A layer around the transport
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Process `request`, usually by calling `next.run(request)`
    async fn handle(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Remainder of the chain after the current middleware
#[derive(Clone, Copy)]
pub struct Next<'a> {
    middlewares: &'a [Arc<dyn Middleware>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub fn new(middlewares: &'a [Arc<dyn Middleware>], transport: &'a dyn Transport) -> Self {
        Self {
            middlewares,
            transport,
        }
    }

    /// Hand the request to the next middleware, or to the transport when
    /// the chain is exhausted
    pub async fn run(self, request: ApiRequest) -> Result<ApiResponse> {
        match self.middlewares.split_first() {
            Some((current, rest)) => {
                current
                    .handle(
                        request,
                        Next {
                            middlewares: rest,
                            transport: self.transport,
                        },
                    )
                    .await
            }
            None => self.transport.send(request).await,
        }
    }
}
