//! Navigation boundary
//!
//! The session core never renders anything; it only asks a [`Navigator`] to
//! move to a path. [`RouteGuard`] decides which paths a session may reach.

mod guard;
mod history;

pub use guard::{RouteDecision, RouteGuard};
pub use history::HistoryNavigator;

/// Router abstraction implemented by the UI shell
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Path currently displayed
    fn current_path(&self) -> String;

    /// Move to `path`
    fn navigate(&self, path: &str);
}
