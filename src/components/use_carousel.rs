//! Hook binding a [`CarouselEngine`] to the component that mounts it.

use bizcard_core::{Carousel, CarouselEngine, CarouselTiming};
use dioxus::prelude::*;

/// A carousel owned by the calling component.
///
/// The engine lives in a scope-owned `CopyValue`, so it is dropped (and its
/// timers cancelled) when the component unmounts. `state` mirrors every
/// change the engine publishes.
#[derive(Clone, Copy)]
pub struct UseCarousel {
    engine: CopyValue<CarouselEngine>,
    state: Signal<Carousel>,
}

impl UseCarousel {
    pub fn state(&self) -> Carousel {
        (self.state)()
    }

    pub fn index(&self) -> usize {
        self.engine.read().index()
    }

    pub fn next(&self) {
        self.engine.read().next();
    }

    pub fn previous(&self) {
        self.engine.read().previous();
    }

    pub fn go_to(&self, index: usize) {
        if let Err(e) = self.engine.read().go_to(index) {
            tracing::error!("Carousel navigation ignored: {}", e);
        }
    }
}

/// Mount a carousel over `len` slides starting at `initial`.
///
/// Arguments are read on first render only. An out-of-range `initial` is
/// logged and replaced by the first slide.
pub fn use_carousel(len: usize, initial: usize, timing: CarouselTiming) -> UseCarousel {
    let engine = use_hook(|| CopyValue::new(CarouselEngine::mount_or_start(len, initial, timing)));

    let mut state = use_signal(|| engine.read().state());

    use_future(move || {
        let mut rx = engine.read().subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let current = *rx.borrow_and_update();
                state.set(current);
            }
        }
    });

    UseCarousel { engine, state }
}
