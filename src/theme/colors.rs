//! Color constants mirrored by the CSS custom properties in `styles.rs`.
//!
//! Used where colors are baked into generated markup (QR codes).

// === NEUTRALS ===
pub const INK: &str = "#111111";
pub const PAPER: &str = "#ffffff";
