//! Notification center with per-entry expiry timers

use super::types::{
    Notification, NotificationEvent, NotificationId, NotificationKind, RemovalReason,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Lifetime used when the caller does not pick one
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

const EVENT_CHANNEL_CAPACITY: usize = 128;

/// Process-wide notification queue, shared via `Arc`
#[derive(Debug)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
    default_duration: Duration,
}

#[derive(Debug)]
struct Inner {
    entries: Mutex<Vec<Notification>>,
    timers: Mutex<HashMap<NotificationId, JoinHandle<()>>>,
    next_id: AtomicU64,
    events: broadcast::Sender<NotificationEvent>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_DURATION)
    }

    pub fn with_default_duration(default_duration: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(1),
                events,
            }),
            default_duration,
        }
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Append a notification and schedule its expiry.
    ///
    /// A zero duration is rejected: nothing is stored and `None` is returned.
    pub fn push(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Option<Duration>,
    ) -> Option<NotificationId> {
        let duration = duration.unwrap_or(self.default_duration);
        if duration.is_zero() {
            debug!("ignoring notification with zero duration");
            return None;
        }

        let id = NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification {
            id,
            message: message.into(),
            kind,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        };

        self.inner.entries.lock().push(notification.clone());
        let _ = self.inner.events.send(NotificationEvent::Added(notification));
        self.schedule_expiry(id, duration);

        Some(id)
    }

    pub fn info(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(message, NotificationKind::Info, None)
    }

    pub fn success(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(message, NotificationKind::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> Option<NotificationId> {
        self.push(message, NotificationKind::Error, None)
    }

    /// Remove a notification before it expires and cancel its timer.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        if let Some(timer) = self.inner.timers.lock().remove(&id) {
            timer.abort();
        }
        self.inner.remove(id, RemovalReason::Dismissed)
    }

    /// Current notifications in insertion order
    pub fn list(&self) -> Vec<Notification> {
        self.inner.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    /// Number of expiry timers still armed
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.lock().len()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.inner.events.subscribe()
    }

    fn schedule_expiry(&self, id: NotificationId, duration: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%id, "no async runtime; notification stays until dismissed");
            return;
        };

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        // Hold the timer map while spawning so the task cannot finish before
        // its handle is registered.
        let mut timers = self.inner.timers.lock();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(inner) = weak.upgrade() {
                inner.timers.lock().remove(&id);
                inner.remove(id, RemovalReason::Expired);
            }
        });
        timers.insert(id, handle);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn remove(&self, id: NotificationId, reason: RemovalReason) -> bool {
        let removed = {
            let mut entries = self.entries.lock();
            let before = entries.len();
            entries.retain(|n| n.id != id);
            entries.len() != before
        };

        if removed {
            debug!(%id, ?reason, "notification removed");
            let _ = self.events.send(NotificationEvent::Removed { id, reason });
        }
        removed
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for (_, timer) in self.timers.get_mut().drain() {
            timer.abort();
        }
    }
}
