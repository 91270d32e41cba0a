//! Toast queue: insertion-ordered notifications that expire on their own.
//!
//! The list is published through a `watch` channel so every push and removal
//! is visible to subscribers immediately. Expiry runs as one detached task per
//! toast; removal by id is idempotent, so an expiry racing a manual dismissal
//! is harmless.

use crate::toast::message::{Toast, ToastId, ToastMessage};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Toast settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Lifetime of a toast pushed without an explicit duration
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    4000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
        }
    }
}

impl ToastConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_duration_ms == 0 {
            return Err("default_duration_ms must be greater than zero".to_string());
        }
        Ok(())
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

struct Inner {
    toasts: watch::Sender<Vec<Toast>>,
    next_id: AtomicU64,
    default_duration: Duration,
}

/// Shared handle to the application's toast list. Cloning is cheap and every
/// clone refers to the same list.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Inner>,
}

impl ToastQueue {
    pub fn new(config: &ToastConfig) -> Self {
        Self::with_default_duration(config.default_duration())
    }

    pub fn with_default_duration(default_duration: Duration) -> Self {
        let (toasts, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                toasts,
                next_id: AtomicU64::new(1),
                default_duration,
            }),
        }
    }

    /// Append a toast and schedule its expiry. Returns the new toast's id.
    pub fn push(&self, message: ToastMessage) -> ToastId {
        let id = ToastId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let toast = Toast::from_message(id, message, self.inner.default_duration);
        let duration = toast.duration();

        debug!(
            toast_id = %id,
            variant = toast.variant.as_str(),
            title = %toast.title,
            duration_ms = toast.duration_ms,
            "toast pushed"
        );
        self.inner.toasts.send_modify(|list| list.push(toast));
        self.schedule_expiry(id, duration);
        id
    }

    /// Remove a toast. Returns whether it was still present.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = remove_toast(&self.inner, id);
        if removed {
            debug!(toast_id = %id, "toast dismissed");
        }
        removed
    }

    /// Current toasts in insertion order.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.inner.toasts.borrow().iter().any(|t| t.id == id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.toasts.subscribe()
    }

    fn schedule_expiry(&self, id: ToastId, duration: Duration) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(toast_id = %id, "no async runtime; toast will not expire on its own");
                return;
            }
        };
        let Some(deadline) = Instant::now().checked_add(duration) else {
            debug!(toast_id = %id, "duration beyond the clock range; toast stays until dismissed");
            return;
        };
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(inner) = weak.upgrade() {
                if remove_toast(&inner, id) {
                    debug!(toast_id = %id, "toast expired");
                }
            }
        });
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(&ToastConfig::default())
    }
}

fn remove_toast(inner: &Inner, id: ToastId) -> bool {
    inner.toasts.send_if_modified(|list| {
        let before = list.len();
        list.retain(|t| t.id != id);
        list.len() != before
    })
}
