//! Gateway and its builder

use super::bearer::BearerAuth;
use super::expiry::SessionExpiry;
use super::middleware::{Middleware, Next};
use super::tracing_layer::RequestTracing;
use super::transport::Transport;
use super::types::{ApiRequest, ApiResponse};
use crate::auth::credential::CredentialStore;
use crate::auth::session::SessionTeardown;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Single chokepoint for backend calls
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    middlewares: Arc<[Arc<dyn Middleware>]>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("middlewares", &self.middleware_names())
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn builder(transport: Arc<dyn Transport>) -> GatewayBuilder {
        GatewayBuilder::new(transport)
    }

    /// The standard chain: tracing, expiry handling, credential attachment
    pub fn standard(
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
        teardown: SessionTeardown,
    ) -> Self {
        GatewayBuilder::new(transport)
            .layer(RequestTracing)
            .layer(SessionExpiry::new(teardown))
            .layer(BearerAuth::new(credentials))
            .build()
    }

    pub fn middleware_names(&self) -> Vec<&'static str> {
        self.middlewares.iter().map(|m| m.name()).collect()
    }

    /// Run the chain and return the raw response, whatever its status
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        Next::new(&self.middlewares, self.transport.as_ref())
            .run(request)
            .await
    }

    /// Run the chain; non-success statuses become errors
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_error())
        }
    }

    /// Run the chain and decode a JSON body
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.send(request).await?.json()
    }
}

/// Composes the middleware chain; layers run in the order they are added
pub struct GatewayBuilder {
    transport: Arc<dyn Transport>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl GatewayBuilder {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            middlewares: Vec::new(),
        }
    }

    pub fn layer<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Gateway {
        Gateway {
            transport: self.transport,
            middlewares: self.middlewares.into(),
        }
    }
}
