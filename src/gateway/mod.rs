//! HTTP gateway
//!
//! Every backend call passes through one [`Gateway`]: an explicit middleware
//! chain composed at construction time in front of a [`Transport`]. The
//! default chain is, outermost first:
//!
//! 1. [`RequestTracing`] - request id header and timing logs
//! 2. [`SessionExpiry`] - tears the session down on a 401 from a regular call
//! 3. [`BearerAuth`] - attaches the stored credential
//!
//! Non-success responses are normalised into [`ClientError`](crate::utils::error::ClientError)
//! after the chain has run, so callers only ever see a typed value or a
//! displayable error.

mod bearer;
mod client;
mod expiry;
mod middleware;
mod tracing_layer;
mod transport;
mod types;

pub use bearer::BearerAuth;
pub use client::{Gateway, GatewayBuilder};
pub use expiry::SessionExpiry;
pub use middleware::{Middleware, Next};
pub use tracing_layer::{REQUEST_ID_HEADER, RequestTracing};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ApiRequest, ApiResponse, CallKind, RequestBody};
