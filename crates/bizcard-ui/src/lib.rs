//! Digital Business Card UI Components
//!
//! Dioxus primitives shared by the card sections: buttons, badges and the
//! closed icon set.
//!
//! ## Design Notes
//!
//! - **Primary red**: actions, accents, active indicators
//! - **White cards on a dark scrim**: content blocks
//! - **Black**: media panels (gallery, closing image)

pub mod components;

pub use components::*;
