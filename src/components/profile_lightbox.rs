//! Enlarged profile photo.

use bizcard_core::ImageRef;
use bizcard_ui::CloseButton;
use dioxus::prelude::*;

/// Full-screen view of the profile image. Clicking the backdrop or the close
/// button dismisses it; clicks on the image itself do not.
#[component]
pub fn ProfileLightbox(image: ImageRef, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "lightbox",
            onclick: move |_| on_close.call(()),

            div {
                class: "lightbox__frame",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    aria_label: "Cerrar imagen".to_string(),
                    onclick: move |_| on_close.call(()),
                }
                img {
                    class: "lightbox__img",
                    src: "{image.src}",
                    alt: "{image.alt}",
                }
            }
        }
    }
}
