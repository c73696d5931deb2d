use dioxus::prelude::*;

use crate::pages::CardPage;
use crate::theme::GLOBAL_STYLES;
use bizcard_core::FeedbackChannel;

/// Application routes.
///
/// The card is a single page: every path renders it.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    CardPage {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// Any unknown path shows the card.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown route /{}, showing card", segments.join("/"));
    rsx! { CardPage {} }
}

/// Root application component.
///
/// Provides global styles, the feedback channel, and routing. The card config
/// itself is provided at launch.
#[component]
pub fn App() -> Element {
    use_context_provider(FeedbackChannel::default);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
