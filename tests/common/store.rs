//! Durable credential store that records how often it was written

use defect_tracker_client::auth::credential::{CredentialStore, FileCredentialStore};
use defect_tracker_client::utils::error::Result;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct CountingStore {
    inner: FileCredentialStore,
    saves: AtomicUsize,
    clears: AtomicUsize,
}

impl CountingStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            inner: FileCredentialStore::new(dir),
            saves: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl CredentialStore for CountingStore {
    fn save(&self, token: &str) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(token)
    }

    fn load(&self) -> Result<Option<String>> {
        self.inner.load()
    }

    fn clear(&self) -> Result<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear()
    }
}
