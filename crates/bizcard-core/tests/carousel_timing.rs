//! Carousel timer behavior under a paused tokio clock
//!
//! These tests verify autoplay, intro overlay dismissal, unmount
//! cancellation and inline/modal index seeding.

use std::time::Duration;

use bizcard_core::{CardShell, CarouselEngine, CarouselTiming};

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Autoplay
// ============================================================================

#[tokio::test(start_paused = true)]
async fn autoplay_advances_every_five_seconds() {
    let engine = CarouselEngine::mount(3, 0, CarouselTiming::inline()).unwrap();

    advance_ms(4999).await;
    assert_eq!(engine.index(), 0);

    advance_ms(1).await;
    assert_eq!(engine.index(), 1);

    advance_ms(5000).await;
    assert_eq!(engine.index(), 2);

    advance_ms(5000).await;
    assert_eq!(engine.index(), 0, "autoplay wraps to the first slide");
}

#[tokio::test(start_paused = true)]
async fn single_slide_never_autoplays() {
    let engine = CarouselEngine::mount(1, 0, CarouselTiming::inline()).unwrap();
    let mut rx = engine.subscribe();
    rx.borrow_and_update();

    advance_ms(3300).await;
    // Only the overlay change is observed
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    advance_ms(20_000).await;
    assert!(!rx.has_changed().unwrap());
    assert_eq!(engine.index(), 0);
}

#[tokio::test(start_paused = true)]
async fn empty_gallery_mounts_without_panicking() {
    let engine = CarouselEngine::mount(0, 0, CarouselTiming::inline()).unwrap();
    engine.next();
    engine.previous();
    advance_ms(20_000).await;
    assert_eq!(engine.index(), 0);
    assert!(engine.go_to(0).is_err());
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_does_not_reset_autoplay() {
    let engine = CarouselEngine::mount(5, 0, CarouselTiming::inline()).unwrap();

    advance_ms(4000).await;
    engine.next();
    assert_eq!(engine.index(), 1);

    // The interval still fires at t=5000, one second after the manual step
    advance_ms(1000).await;
    assert_eq!(engine.index(), 2);
}

// ============================================================================
// Overlay
// ============================================================================

#[tokio::test(start_paused = true)]
async fn overlay_hides_once_after_delay() {
    let engine = CarouselEngine::mount(3, 0, CarouselTiming::inline()).unwrap();
    assert!(engine.state().overlay_visible());

    engine.next();
    advance_ms(3100).await;
    assert!(engine.state().overlay_visible(), "interaction does not hide it early");

    advance_ms(200).await;
    assert!(!engine.state().overlay_visible());

    advance_ms(60_000).await;
    assert!(!engine.state().overlay_visible());
}

// ============================================================================
// Unmount
// ============================================================================

#[tokio::test(start_paused = true)]
async fn unmount_cancels_all_timers() {
    let engine = CarouselEngine::mount(3, 0, CarouselTiming::inline()).unwrap();
    let mut rx = engine.subscribe();
    rx.borrow_and_update();

    engine.unmount();
    advance_ms(30_000).await;

    assert!(!rx.has_changed().unwrap());
    let state = engine.state();
    assert_eq!(state.index(), 0);
    assert!(state.overlay_visible());
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_all_timers() {
    let engine = CarouselEngine::mount(3, 0, CarouselTiming::inline()).unwrap();
    let mut rx = engine.subscribe();
    rx.borrow_and_update();
    drop(engine);

    advance_ms(30_000).await;
    // Sender is gone: either closed, or never changed again
    assert!(!matches!(rx.has_changed(), Ok(true)));
    assert_eq!(rx.borrow().index(), 0);
}

// ============================================================================
// Inline / modal seeding
// ============================================================================

#[tokio::test(start_paused = true)]
async fn modal_is_seeded_from_inline_index() {
    let inline = CarouselEngine::mount(4, 0, CarouselTiming::inline()).unwrap();
    let mut shell = CardShell::new();

    inline.go_to(2).unwrap();
    shell.open_gallery(inline.index());

    let modal =
        CarouselEngine::mount(4, shell.gallery_seed(), CarouselTiming::modal()).unwrap();
    assert_eq!(modal.index(), 2);

    modal.next();
    modal.next();
    assert_eq!(modal.index(), 0);
    assert_eq!(inline.index(), 2, "modal navigation never touches the inline widget");
}

#[tokio::test(start_paused = true)]
async fn reopening_modal_reseeds_from_inline_not_from_last_modal_position() {
    let inline = CarouselEngine::mount(4, 1, CarouselTiming::manual()).unwrap();
    let mut shell = CardShell::new();

    shell.open_gallery(inline.index());
    let modal =
        CarouselEngine::mount(4, shell.gallery_seed(), CarouselTiming::modal()).unwrap();
    modal.go_to(3).unwrap();
    shell.close_gallery();
    drop(modal);

    inline.next();
    shell.open_gallery(inline.index());
    let reopened =
        CarouselEngine::mount(4, shell.gallery_seed(), CarouselTiming::modal()).unwrap();
    assert_eq!(reopened.index(), 2);
}

#[tokio::test(start_paused = true)]
async fn inline_and_modal_autoplay_independently() {
    let inline = CarouselEngine::mount(3, 0, CarouselTiming::inline()).unwrap();
    advance_ms(2500).await;
    let modal = CarouselEngine::mount(3, inline.index(), CarouselTiming::modal()).unwrap();

    advance_ms(2500).await;
    assert_eq!(inline.index(), 1);
    assert_eq!(modal.index(), 0);

    advance_ms(2500).await;
    assert_eq!(inline.index(), 1);
    assert_eq!(modal.index(), 1);
}
