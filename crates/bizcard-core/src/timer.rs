//! Owned, cancellable UI timers.
//!
//! Every delay the card uses (carousel autoplay, intro overlay dismissal,
//! feedback expiry) is a [`TimerHandle`] owned by the component that started
//! it. Dropping the handle cancels the timer, so a torn-down component can
//! never be touched by a late tick.
//!
//! Deadlines are fixed when the handle is created, not when the runtime first
//! polls the spawned task.

use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};

/// Handle to a scheduled callback. Cancels on drop.
#[derive(Debug)]
pub struct TimerHandle {
    abort: AbortHandle,
}

impl TimerHandle {
    /// Run `f` once, `delay` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn once<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let task = tokio::spawn(async move {
            sleep_until(deadline).await;
            f();
        });
        Self {
            abort: task.abort_handle(),
        }
    }

    /// Run `f` every `period`, starting one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn every<F>(period: Duration, mut f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let task = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                f();
            }
        });
        Self {
            abort: task.abort_handle(),
        }
    }

    /// Stop the timer. Idempotent.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Whether the timer has fired (one-shot) or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn once_fires_after_delay() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let _timer = TimerHandle::once(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::advance(Duration::from_millis(99)).await;
        settle().await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn every_ticks_each_period() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let _timer = TimerHandle::every(Duration::from_millis(50), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..3 {
            tokio::time::advance(Duration::from_millis(50)).await;
            settle().await;
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let timer = TimerHandle::once(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(timer);

        tokio::time::advance(Duration::from_millis(20)).await;
        settle().await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
