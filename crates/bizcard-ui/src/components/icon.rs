//! Closed icon set.
//!
//! Icons are a fixed enum mapped to SVG path data through [`Icon::paths`].
//! Config-facing icon enums convert into [`Icon`], so an unknown icon name
//! is a parse error instead of a blank square.

use bizcard_core::{ContactIcon, TagIcon};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Icon {
    Phone,
    Mail,
    Globe,
    MapPin,
    CalendarClock,
    Building,
    Truck,
    Download,
    Share,
    ArrowUpRight,
    ChevronLeft,
    ChevronRight,
    Close,
    Sparkles,
}

impl Icon {
    /// Stroke paths on a 24x24 grid.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Icon::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            Icon::CalendarClock => &[
                "M21 7.5V6a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h3.5",
                "M16 2v4",
                "M8 2v4",
                "M3 10h5",
                "M17.5 17.5 16 16.3V14",
                "M16 22a6 6 0 1 0 0-12a6 6 0 1 0 0 12z",
            ],
            Icon::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4",
                "M10 10h4",
                "M10 14h4",
                "M10 18h4",
            ],
            Icon::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.62l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M17 20a2 2 0 1 0 0-4a2 2 0 1 0 0 4z",
                "M7 20a2 2 0 1 0 0-4a2 2 0 1 0 0 4z",
            ],
            Icon::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "M7 10l5 5 5-5",
                "M12 15V3",
            ],
            Icon::Share => &[
                "M18 8a3 3 0 1 0 0-6a3 3 0 1 0 0 6z",
                "M6 15a3 3 0 1 0 0-6a3 3 0 1 0 0 6z",
                "M18 22a3 3 0 1 0 0-6a3 3 0 1 0 0 6z",
                "M8.59 13.51l6.83 3.98",
                "M15.41 6.51l-6.82 3.98",
            ],
            Icon::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Icon::ChevronLeft => &["M15 18l-6-6 6-6"],
            Icon::ChevronRight => &["M9 18l6-6-6-6"],
            Icon::Close => &["M18 6 6 18", "M6 6l12 12"],
            Icon::Sparkles => &["M12 3l1.9 5.8L20 10.5l-6.1 1.7L12 18l-1.9-5.8L4 10.5l6.1-1.7z"],
        }
    }
}

impl From<ContactIcon> for Icon {
    fn from(icon: ContactIcon) -> Self {
        match icon {
            ContactIcon::Phone => Icon::Phone,
            ContactIcon::Mail => Icon::Mail,
            ContactIcon::Globe => Icon::Globe,
        }
    }
}

impl From<TagIcon> for Icon {
    fn from(icon: TagIcon) -> Self {
        match icon {
            TagIcon::MapPin => Icon::MapPin,
            TagIcon::CalendarClock => Icon::CalendarClock,
        }
    }
}

/// Inline SVG for an [`Icon`]. Decorative: hidden from screen readers.
#[component]
pub fn IconGlyph(
    icon: Icon,
    /// Size class, e.g. "icon--sm"
    #[props(default = "icon".to_string())]
    class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths().iter() {
                path { d: "{d}" }
            }
        }
    }
}
