//! Slide carousel: index state machine plus its timers.
//!
//! [`Carousel`] is the pure state (`len`, active index, intro overlay flag).
//! [`CarouselEngine`] owns one `Carousel` for the lifetime of a mounted
//! widget and drives it from two timers:
//!
//! - autoplay: `next()` every [`AUTOPLAY_INTERVAL`] while more than one
//!   slide exists. Manual navigation does not reset this interval.
//! - overlay: hides the introductory overlay once, [`OVERLAY_DELAY`] after
//!   mount. It never comes back.
//!
//! The inline gallery and the full-screen modal each mount their own engine.
//! They share nothing; the modal is seeded with the inline index when it
//! opens and is dropped (timers and all) when it closes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{CardError, CardResult};
use crate::timer::TimerHandle;

/// Period between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Delay before the introductory overlay is hidden.
pub const OVERLAY_DELAY: Duration = Duration::from_millis(3200);

/// Active-slide state for an ordered set of `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    overlay_visible: bool,
}

impl Carousel {
    /// Start at `initial`. With no slides the index is pinned to 0.
    pub fn new(len: usize, initial: usize) -> CardResult<Self> {
        if len > 0 && initial >= len {
            return Err(CardError::InvalidCarouselIndex {
                index: initial,
                len,
            });
        }
        Ok(Self {
            len,
            index: if len == 0 { 0 } else { initial },
            overlay_visible: true,
        })
    }

    /// Start at the first slide. Never fails.
    pub fn at_start(len: usize) -> Self {
        Self {
            len,
            index: 0,
            overlay_visible: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Advance one slide, wrapping to the first. No-op without slides.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back one slide, wrapping to the last. No-op without slides.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to slide `index`.
    pub fn go_to(&mut self, index: usize) -> CardResult<()> {
        if index >= self.len {
            return Err(CardError::InvalidCarouselIndex {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    /// One-based position for display, e.g. `"2/3"`.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.index + 1, self.len)
        }
    }
}

/// Which timers a mounted carousel runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub autoplay: Option<Duration>,
    /// `None` means the variant has no intro overlay at all.
    pub overlay: Option<Duration>,
}

impl CarouselTiming {
    /// Inline gallery widget: autoplay plus a dismissing intro overlay.
    pub fn inline() -> Self {
        Self {
            autoplay: Some(AUTOPLAY_INTERVAL),
            overlay: Some(OVERLAY_DELAY),
        }
    }

    /// Full-screen modal: autoplay only.
    pub fn modal() -> Self {
        Self {
            autoplay: Some(AUTOPLAY_INTERVAL),
            overlay: None,
        }
    }

    /// No timers at all; navigation is manual only.
    pub fn manual() -> Self {
        Self {
            autoplay: None,
            overlay: None,
        }
    }
}

/// A mounted carousel. Dropping it cancels every timer it started.
///
/// Must be mounted from within a tokio runtime.
#[derive(Debug)]
pub struct CarouselEngine {
    state: Arc<watch::Sender<Carousel>>,
    /// Cleared by `unmount` while holding the state lock; timer ticks check it
    /// under the same lock.
    mounted: Arc<AtomicBool>,
    autoplay: Option<TimerHandle>,
    overlay: Option<TimerHandle>,
}

impl CarouselEngine {
    /// Mount at slide `initial`, which must be in range when slides exist.
    pub fn mount(len: usize, initial: usize, timing: CarouselTiming) -> CardResult<Self> {
        Ok(Self::start(Carousel::new(len, initial)?, timing))
    }

    /// Mount at the first slide.
    pub fn mount_at_start(len: usize, timing: CarouselTiming) -> Self {
        Self::start(Carousel::at_start(len), timing)
    }

    /// Mount at `initial`, or at the first slide if `initial` is out of range.
    /// The bad index is logged.
    pub fn mount_or_start(len: usize, initial: usize, timing: CarouselTiming) -> Self {
        Self::mount(len, initial, timing).unwrap_or_else(|e| {
            tracing::error!("{}; starting at first slide", e);
            Self::mount_at_start(len, timing)
        })
    }

    fn start(mut carousel: Carousel, timing: CarouselTiming) -> Self {
        let len = carousel.len();
        let initial = carousel.index();
        if timing.overlay.is_none() {
            carousel.hide_overlay();
        }
        let (tx, _rx) = watch::channel(carousel);
        let state = Arc::new(tx);
        let mounted = Arc::new(AtomicBool::new(true));

        let autoplay = match timing.autoplay {
            Some(period) if len > 1 => {
                let state = state.clone();
                let mounted = mounted.clone();
                Some(TimerHandle::every(period, move || {
                    autoplay_tick(&state, &mounted);
                }))
            }
            _ => None,
        };

        let overlay = timing.overlay.map(|delay| {
            let state = state.clone();
            let mounted = mounted.clone();
            TimerHandle::once(delay, move || {
                overlay_tick(&state, &mounted);
            })
        });

        tracing::debug!(len, initial, "Carousel mounted");

        Self {
            state,
            mounted,
            autoplay,
            overlay,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Carousel {
        *self.state.borrow()
    }

    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }

    /// Observe every state change, from timers or navigation.
    pub fn subscribe(&self) -> watch::Receiver<Carousel> {
        self.state.subscribe()
    }

    pub fn next(&self) {
        self.state.send_modify(Carousel::next);
    }

    pub fn previous(&self) {
        self.state.send_modify(Carousel::previous);
    }

    pub fn go_to(&self, index: usize) -> CardResult<()> {
        let mut result = Ok(());
        self.state.send_if_modified(|c| {
            let before = c.index();
            result = c.go_to(index);
            result.is_ok() && c.index() != before
        });
        result
    }

    /// Cancel all timers. The state stays readable but no longer changes on
    /// its own. Dropping the engine does the same.
    ///
    /// Aborting a timer does not stop a tick that is already running, so the
    /// flag is cleared under the state lock: a tick in progress finishes
    /// first and every later one sees the engine unmounted.
    pub fn unmount(&self) {
        self.state.send_if_modified(|_| {
            self.mounted.store(false, Ordering::Release);
            false
        });
        if let Some(timer) = &self.autoplay {
            timer.cancel();
        }
        if let Some(timer) = &self.overlay {
            timer.cancel();
        }
    }
}

fn autoplay_tick(state: &watch::Sender<Carousel>, mounted: &AtomicBool) {
    state.send_if_modified(|c| {
        if !mounted.load(Ordering::Acquire) {
            return false;
        }
        c.next();
        true
    });
}

fn overlay_tick(state: &watch::Sender<Carousel>, mounted: &AtomicBool) {
    state.send_if_modified(|c| {
        if !mounted.load(Ordering::Acquire) || !c.overlay_visible {
            return false;
        }
        c.hide_overlay();
        true
    });
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        self.unmount();
        tracing::debug!("Carousel unmounted");
    }
}
