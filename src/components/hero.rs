//! Hero section: name, title, company block and specialization pills.

use bizcard_core::{BadgeVariant, HeroConfig};
use bizcard_ui::{Badge, Icon, IconGlyph};
use dioxus::prelude::*;

#[component]
pub fn Hero(data: HeroConfig) -> Element {
    rsx! {
        div { class: "hero",
            header { class: "hero__header",
                div { class: "hero__badge", "{data.badge}" }
                h1 { class: "hero__name", "{data.name}" }
                p { class: "hero__title", "{data.title}" }
            }

            div { class: "panel",
                div { class: "panel__row",
                    div { class: "panel__icon",
                        IconGlyph { icon: Icon::Building }
                    }
                    div { class: "company",
                        div {
                            h2 { class: "company__name", "{data.company_name}" }
                            p { class: "company__description", "{data.company_description}" }
                        }
                        div { class: "company__addresses",
                            for (index, address) in data.addresses.iter().enumerate() {
                                div { key: "{index}",
                                    span { class: "company__address-label", "{address.label}" }
                                    p { class: "company__address", "{address.value}" }
                                }
                            }
                        }
                        div { class: "tags",
                            for (index, tag) in data.tags.iter().enumerate() {
                                {
                                    let extra = tag_class(tag.variant);
                                    rsx! {
                                        Badge {
                                            key: "{index}",
                                            variant: tag.variant,
                                            class: extra.to_string(),
                                            if let Some(icon) = tag.icon {
                                                IconGlyph { icon: Icon::from(icon), class: "icon icon--xs".to_string() }
                                            }
                                            "{tag.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "panel",
                div { class: "eyebrow eyebrow--primary",
                    IconGlyph { icon: Icon::Truck, class: "icon icon--sm".to_string() }
                    "{data.specialization.label}"
                }
                div { class: "pills",
                    for (index, item) in data.specialization.items.iter().enumerate() {
                        Badge {
                            key: "{index}",
                            variant: BadgeVariant::Outline,
                            class: "pill".to_string(),
                            span { class: "sr-only", "{item.description}" }
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Outline tags are tinted with the primary color.
fn tag_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Outline => "tag--accent",
        BadgeVariant::Default => "",
    }
}
