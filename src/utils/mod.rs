//! Shared utilities
//!
//! Error types and logging setup used across the crate.

pub mod error;
pub mod logging;

pub use error::{ClientError, Result};
