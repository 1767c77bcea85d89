//! # Defect Tracker Client
//!
//! Session and authorization core for the construction defect tracker.
//!
//! ## Features
//!
//! - **Credential Store**: durable bearer token that survives restarts
//! - **Gateway**: explicit middleware chain attaching the credential and
//!   reacting to rejected sessions
//! - **Session State**: observable state machine with single-shot restoration
//! - **Access Policy**: one static role table for routes and UI actions
//! - **Notifications**: ordered, self-expiring user messages
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use defect_tracker_client::{ClientConfig, DefectClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DefectClient::new(ClientConfig::from_env()?)?;
//!     client.start().await;
//!
//!     if !client.session().is_authenticated() {
//!         let user = client.auth().login("inspector", "secret").await?;
//!         println!("Signed in as {}", user.display_name());
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod gateway;
pub mod navigation;
pub mod notifications;
pub mod utils;

// Re-export main types
pub use auth::SessionManager;
pub use auth::rbac::{Action, Resource, Role};
pub use auth::session::{SessionState, SessionStatus};
pub use auth::types::User;
pub use client::DefectClient;
pub use config::{ClientConfig, ConfigBuilder};
pub use utils::error::{ClientError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
