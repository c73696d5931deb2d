//! Transient status message shown after user actions.
//!
//! Last write wins: a new message replaces the visible one and restarts the
//! expiry window. There is never more than one message and no queue.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::timer::TimerHandle;

/// How long a message stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2800);

/// Cloneable handle to the single feedback slot.
///
/// The pending expiry timer is cancelled once the last handle is dropped.
#[derive(Debug, Clone)]
pub struct FeedbackChannel {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    message: watch::Sender<Option<String>>,
    pending: Mutex<Pending>,
    duration: Duration,
}

/// The expiry window of the visible message.
#[derive(Debug, Default)]
struct Pending {
    /// Bumped by every `show` and `clear`; an expiry only clears the message
    /// it was scheduled for.
    generation: u64,
    expiry: Option<TimerHandle>,
}

impl Inner {
    /// Clear the message if no newer `show` or `clear` happened since the
    /// timer for `generation` was scheduled.
    fn expire(&self, generation: u64) {
        let pending = self.pending.lock();
        if pending.generation == generation {
            self.message.send_replace(None);
        }
    }
}

impl FeedbackChannel {
    pub fn new(duration: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                message: tx,
                pending: Mutex::new(Pending::default()),
                duration,
            }),
        }
    }

    /// Display `message`, replacing any current one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "Feedback shown");

        // An old timer may already be past its abort point; the generation
        // bump under the lock is what keeps it from clearing this message.
        let mut pending = self.inner.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        let generation = pending.generation;
        if let Some(previous) = pending.expiry.take() {
            previous.cancel();
        }
        self.inner.message.send_replace(Some(message));

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        pending.expiry = Some(TimerHandle::once(self.inner.duration, move || {
            if let Some(inner) = inner.upgrade() {
                inner.expire(generation);
            }
        }));
    }

    /// Remove the message immediately.
    pub fn clear(&self) {
        let mut pending = self.inner.pending.lock();
        pending.generation = pending.generation.wrapping_add(1);
        if let Some(timer) = pending.expiry.take() {
            timer.cancel();
        }
        self.inner.message.send_if_modified(|m| m.take().is_some());
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<String> {
        self.inner.message.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.inner.message.subscribe()
    }

    pub fn duration(&self) -> Duration {
        self.inner.duration
    }
}

impl Default for FeedbackChannel {
    fn default() -> Self {
        Self::new(FEEDBACK_DURATION)
    }
}
