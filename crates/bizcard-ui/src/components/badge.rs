//! Badge / pill component

use bizcard_core::BadgeVariant;
use dioxus::prelude::*;

/// CSS class for a badge variant
pub fn badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "badge badge--default",
        BadgeVariant::Outline => "badge badge--outline",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let base = badge_class(props.variant);
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        span { class: "{full_class}", {props.children} }
    }
}
