//! Reusable card primitives

mod badge;
mod button;
mod icon;

pub use badge::*;
pub use button::*;
pub use icon::*;
