//! Error handling
//!
//! A single error type flows through the gateway, the session core and the
//! API wrappers. Every failure carries a message that can be shown to the
//! user as-is.

mod detail;
mod helpers;
mod types;

pub use detail::extract_detail;
pub use types::{ClientError, Result, CONNECTION_MESSAGE};
