//! Contact channel buttons and the vCard / share quick actions.

use bizcard_core::{BoundAction, QuickActionLabels};
use bizcard_ui::{Button, ButtonVariant, Icon, IconGlyph};
use dioxus::prelude::*;

#[component]
fn ContactButton(action: BoundAction, on_action: EventHandler<BoundAction>) -> Element {
    let icon = Icon::from(action.icon);
    let fired = action.clone();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            class: "contact-btn".to_string(),
            onclick: move |_| on_action.call(fired.clone()),
            span { class: "contact-btn__body",
                span { class: "contact-btn__icon",
                    IconGlyph { icon: icon }
                }
                span { class: "contact-btn__text",
                    span { class: "contact-btn__label", "{action.label}" }
                    span { class: "contact-btn__detail", "{action.detail}" }
                }
            }
            IconGlyph { icon: Icon::ArrowUpRight, class: "icon icon--lg contact-btn__arrow".to_string() }
        }
    }
}

#[component]
pub fn ContactActions(
    actions: Vec<BoundAction>,
    section_label: String,
    quick_actions: QuickActionLabels,
    on_action: EventHandler<BoundAction>,
    on_download: EventHandler<()>,
    on_share: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "contacts",
            div { class: "contacts__list", "aria-label": "{section_label}",
                for (index, action) in actions.iter().enumerate() {
                    ContactButton {
                        key: "{index}",
                        action: action.clone(),
                        on_action: on_action,
                    }
                }
            }

            div { class: "contacts__quick", "aria-label": "Acciones rápidas",
                Button {
                    variant: ButtonVariant::Dark,
                    class: "quick-btn".to_string(),
                    onclick: move |_| on_download.call(()),
                    IconGlyph { icon: Icon::Download }
                    "{quick_actions.download_label}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "quick-btn quick-btn--share".to_string(),
                    onclick: move |_| on_share.call(()),
                    IconGlyph { icon: Icon::Share }
                    "{quick_actions.share_label}"
                }
            }
        }
    }
}
