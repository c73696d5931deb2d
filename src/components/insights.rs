//! Company and strategy highlights.

use bizcard_core::{BadgeVariant, InsightsConfig};
use bizcard_ui::Badge;
use dioxus::prelude::*;

#[component]
pub fn Insights(data: InsightsConfig, logo_image: String) -> Element {
    rsx! {
        div { class: "insights",
            div { class: "panel",
                div { class: "insights__head",
                    img {
                        class: "insights__logo",
                        src: "{logo_image}",
                        alt: "Logotipo de {data.company.title}",
                    }
                    div {
                        p { class: "eyebrow", "{data.company.subtitle}" }
                        p { class: "insights__title", "{data.company.title}" }
                    }
                }
                ul { class: "insights__bullets",
                    for (index, bullet) in data.company.bullets.iter().enumerate() {
                        li { key: "{index}", "{bullet}" }
                    }
                }
            }

            div { class: "panel",
                div { class: "insights__head",
                    Badge {
                        variant: BadgeVariant::Outline,
                        class: "badge--soft".to_string(),
                        "{data.strategy.badge}"
                    }
                    span { class: "insights__description", "{data.strategy.description}" }
                }
                div { class: "insights__grid",
                    for (index, item) in data.strategy.items.iter().enumerate() {
                        div { key: "{index}", class: "insights__item",
                            p { class: "eyebrow", "{item.title}" }
                            p { class: "insights__item-text", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
