//! Full-screen gallery modal.
//!
//! Mounted only while open. Each mount starts a fresh carousel at
//! `initial_index`, so reopening always follows the inline gallery rather
//! than wherever the modal was left.

use bizcard_core::CarouselTiming;
use bizcard_ui::{Button, ButtonVariant, CloseButton, Icon, IconButton, IconGlyph};
use dioxus::prelude::*;

use super::gallery::slide_class;
use super::use_carousel::use_carousel;
use crate::context::use_card;
use crate::platform::open_external;

#[component]
pub fn GalleryModal(
    /// Slide shown when the modal opens
    initial_index: usize,
    on_close: EventHandler<()>,
) -> Element {
    let card = use_card();
    let gallery = &card.gallery;
    let total = gallery.slides.len();
    let carousel = use_carousel(total, initial_index, CarouselTiming::modal());
    let state = carousel.state();
    let active = state.index();
    let position = state.position_label();

    let caption = gallery
        .slides
        .get(active)
        .map(|s| s.caption.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "gallery-modal",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    aria_label: "Cerrar galería".to_string(),
                    onclick: move |_| on_close.call(()),
                }

                div { class: "gallery-modal__stage",
                    for (index, slide) in gallery.slides.iter().enumerate() {
                        {
                            let class = slide_class("gallery-modal__img", index == active);
                            rsx! {
                                img {
                                    key: "{index}",
                                    class: "{class}",
                                    src: "{slide.src}",
                                    alt: "{slide.alt}",
                                }
                            }
                        }
                    }
                    div { class: "gallery__shade" }

                    {gallery.cta.clone().map(|cta| {
                        let url = cta.url.clone();
                        rsx! {
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "gallery-modal__cta".to_string(),
                                onclick: move |_| open_external(&url),
                                "{cta.label}"
                            }
                        }
                    })}

                    div { class: "gallery__nav gallery__nav--prev",
                        IconButton {
                            aria_label: "Imagen anterior".to_string(),
                            onclick: move |_| carousel.previous(),
                            IconGlyph { icon: Icon::ChevronLeft, class: "icon icon--lg".to_string() }
                        }
                    }
                    div { class: "gallery__nav gallery__nav--next",
                        IconButton {
                            aria_label: "Imagen siguiente".to_string(),
                            onclick: move |_| carousel.next(),
                            IconGlyph { icon: Icon::ChevronRight, class: "icon icon--lg".to_string() }
                        }
                    }
                }

                div { class: "gallery-modal__footer",
                    div {
                        p { class: "eyebrow eyebrow--light", "{gallery.section_title}" }
                        p { class: "gallery__caption", "{caption}" }
                    }
                    span { class: "counter", "{position}" }
                }

                div { class: "gallery__dots gallery-modal__dots",
                    for index in 0..total {
                        {
                            let class = if index == active { "dot dot--active" } else { "dot" };
                            let label = format!("Mostrar imagen {}", index + 1);
                            rsx! {
                                button {
                                    key: "{index}",
                                    r#type: "button",
                                    class: "{class}",
                                    "aria-label": "{label}",
                                    onclick: move |_| carousel.go_to(index),
                                }
                            }
                        }
                    }
                }

                div { class: "gallery-modal__badge",
                    IconGlyph { icon: Icon::Sparkles, class: "icon icon--sm icon--primary".to_string() }
                    "Vista ampliada"
                }
            }
        }
    }
}
