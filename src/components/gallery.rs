//! Inline gallery carousel.
//!
//! Autoplays, shows an intro overlay for a few seconds, and opens the
//! full-screen modal at the current slide on click (or Enter/Space).

use bizcard_core::CarouselTiming;
use bizcard_ui::{Button, ButtonVariant, Icon, IconButton, IconGlyph};
use dioxus::prelude::*;

use super::use_carousel::use_carousel;
use crate::context::use_card;
use crate::platform::open_external;

#[component]
pub fn Gallery(
    /// Called with the active slide index when the image is activated
    on_image_click: EventHandler<usize>,
) -> Element {
    let card = use_card();
    let gallery = &card.gallery;
    let total = gallery.slides.len();
    let carousel = use_carousel(total, 0, CarouselTiming::inline());
    let state = carousel.state();
    let active = state.index();

    let activate = move || on_image_click.call(carousel.index());

    let caption = gallery
        .slides
        .get(active)
        .map(|s| s.caption.clone())
        .unwrap_or_default();
    let position = state.position_label();

    rsx! {
        div { class: "gallery",
            div {
                class: "gallery__stage",
                role: "button",
                tabindex: "0",
                onclick: move |_| activate(),
                onkeydown: move |evt: KeyboardEvent| {
                    let key = evt.key();
                    if key == Key::Enter || key == Key::Character(" ".to_string()) {
                        evt.prevent_default();
                        activate();
                    }
                },

                for (index, slide) in gallery.slides.iter().enumerate() {
                    {
                        let class = slide_class("gallery__img", index == active);
                        let loading = if index == 0 { "eager" } else { "lazy" };
                        rsx! {
                            img {
                                key: "{index}",
                                class: "{class}",
                                src: "{slide.src}",
                                alt: "{slide.alt}",
                                "loading": "{loading}",
                            }
                        }
                    }
                }
                div { class: "gallery__shade" }

                if state.overlay_visible() {
                    div { class: "gallery__intro",
                        div { class: "gallery__intro-label",
                            IconGlyph { icon: Icon::Sparkles, class: "icon icon--sm icon--primary".to_string() }
                            "{gallery.overlay_label}"
                        }
                    }
                }

                {gallery.cta.clone().map(|cta| {
                    let url = cta.url.clone();
                    rsx! {
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "gallery__cta".to_string(),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                open_external(&url);
                            },
                            "{cta.label}"
                        }
                    }
                })}

                div { class: "gallery__dots",
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
                                    onclick: move |evt: MouseEvent| {
                                        evt.stop_propagation();
                                        carousel.go_to(index);
                                    },
                                }
                            }
                        }
                    }
                }
            }

            div { class: "gallery__nav gallery__nav--prev",
                IconButton {
                    aria_label: "Imagen anterior".to_string(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        carousel.previous();
                    },
                    IconGlyph { icon: Icon::ChevronLeft }
                }
            }
            div { class: "gallery__nav gallery__nav--next",
                IconButton {
                    aria_label: "Imagen siguiente".to_string(),
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        carousel.next();
                    },
                    IconGlyph { icon: Icon::ChevronRight }
                }
            }

            div { class: "gallery__footer",
                div {
                    p { class: "eyebrow eyebrow--light", "{gallery.section_title}" }
                    p { class: "gallery__caption", "{caption}" }
                }
                span { class: "counter", "{position}" }
            }
        }
    }
}

/// Class for a stacked slide image; only the active one is opaque.
pub(crate) fn slide_class(base: &str, active: bool) -> String {
    if active {
        format!("{} {}--active", base, base)
    } else {
        base.to_string()
    }
}
