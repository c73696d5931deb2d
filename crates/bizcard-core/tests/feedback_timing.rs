//! Feedback message replacement and expiry

use std::time::Duration;

use bizcard_core::FeedbackChannel;

async fn advance_ms(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn second_message_replaces_first_and_restarts_window() {
    let feedback = FeedbackChannel::default();

    feedback.show("A");
    advance_ms(500).await;
    feedback.show("B");
    assert_eq!(feedback.current().as_deref(), Some("B"));

    // t = 2900: past A's expiry, B must survive
    advance_ms(2400).await;
    assert_eq!(feedback.current().as_deref(), Some("B"));

    // t = 3200: still inside B's window (ends at 3300)
    advance_ms(300).await;
    assert_eq!(feedback.current().as_deref(), Some("B"));

    // t = 3400
    advance_ms(200).await;
    assert_eq!(feedback.current(), None);
}

#[tokio::test(start_paused = true)]
async fn only_one_message_is_ever_visible() {
    let feedback = FeedbackChannel::default();
    let mut rx = feedback.subscribe();

    for message in ["one", "two", "three"] {
        feedback.show(message);
    }
    assert_eq!(rx.borrow_and_update().as_deref(), Some("three"));

    advance_ms(2900).await;
    assert_eq!(rx.borrow_and_update().as_deref(), None);
}

#[tokio::test(start_paused = true)]
async fn same_text_twice_extends_the_window() {
    let feedback = FeedbackChannel::new(Duration::from_millis(1000));
    feedback.show("Copied");
    advance_ms(800).await;
    feedback.show("Copied");

    advance_ms(800).await;
    assert_eq!(feedback.current().as_deref(), Some("Copied"));

    advance_ms(300).await;
    assert_eq!(feedback.current(), None);
}
