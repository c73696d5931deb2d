//! Card context providers.
//!
//! The card config is provided at launch and the feedback channel by `App`;
//! any section reads them through hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let card = use_card();
//! let feedback = use_feedback();
//! feedback.show(&card.contact.feedback.download);
//! ```

use std::sync::Arc;

use bizcard_core::{CardConfig, FeedbackChannel};
use dioxus::prelude::*;

/// Shared, read-only card content.
pub type SharedCard = Arc<CardConfig>;

/// Hook to access the card config from context.
pub fn use_card() -> SharedCard {
    use_context::<SharedCard>()
}

/// Hook to access the page-wide feedback channel.
///
/// Every user action reports through this one channel so only one status
/// message is ever on screen.
pub fn use_feedback() -> FeedbackChannel {
    use_context::<FeedbackChannel>()
}

/// Reactive view of the current feedback message.
///
/// Re-renders the caller whenever a message is shown or expires.
pub fn use_feedback_message() -> Signal<Option<String>> {
    let feedback = use_feedback();
    let mut message = use_signal(|| feedback.current());

    use_future(move || {
        let mut rx = feedback.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().clone();
                message.set(current);
            }
        }
    });

    message
}
