//! In-memory navigator

use super::Navigator;
use parking_lot::RwLock;
use tracing::debug;

/// Keeps a linear history of visited paths
#[derive(Debug)]
pub struct HistoryNavigator {
    history: RwLock<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: RwLock::new(vec![initial.into()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> String {
        self.history.read().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        let mut history = self.history.write();
        if history.last().map(String::as_str) == Some(path) {
            return;
        }
        debug!(path, "navigate");
        history.push(path.to_string());
    }
}
