//! Ephemeral user-facing notifications
//!
//! An ordered collection of toasts. Each entry expires on its own timer
//! unless dismissed first; dismissal cancels the timer.

mod center;
mod types;

pub use center::{DEFAULT_DURATION, NotificationCenter};
pub use types::{Notification, NotificationEvent, NotificationId, NotificationKind, RemovalReason};
