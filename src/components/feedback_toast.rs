//! Status toast for the page-wide feedback channel.

use bizcard_ui::{Icon, IconGlyph};
use dioxus::prelude::*;

use crate::context::use_feedback_message;

/// Shows the current feedback message, if any, pinned to the top of the
/// window. Expiry is handled by the channel itself.
#[component]
pub fn FeedbackToast() -> Element {
    let message = use_feedback_message();

    rsx! {
        if let Some(text) = message() {
            div { class: "toast-container",
                div { class: "toast", role: "status",
                    IconGlyph { icon: Icon::Sparkles, class: "icon icon--sm".to_string() }
                    "{text}"
                }
            }
        }
    }
}
