//! Digital Business Card Core Library
//!
//! Framework-free logic behind a single-page business card: the content
//! model, the slide carousel, vCard export, sharing with fallbacks and the
//! transient feedback message.
//!
//! ## Overview
//!
//! The desktop shell reads one [`CardConfig`], binds its contact actions,
//! and mounts [`CarouselEngine`]s for the inline gallery and the modal.
//! Every timer is a [`TimerHandle`] owned by the component that started it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bizcard_core::{vcard, CardConfig, CarouselEngine, CarouselTiming};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let card = CardConfig::builtin()?;
//!     println!("{}", vcard::encode(&card.vcard));
//!
//!     let gallery = CarouselEngine::mount(card.gallery.slides.len(), 0, CarouselTiming::inline())?;
//!     gallery.next();
//!     println!("{}", gallery.state().position_label());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod carousel;
pub mod config;
pub mod error;
pub mod feedback;
pub mod links;
pub mod share;
pub mod shell;
pub mod timer;
pub mod vcard;

// Re-exports
pub use actions::{bind_actions, BoundAction, LinkOpener};
pub use carousel::{Carousel, CarouselEngine, CarouselTiming, AUTOPLAY_INTERVAL, OVERLAY_DELAY};
pub use config::*;
pub use error::{CardError, CardResult, ShareError};
pub use feedback::{FeedbackChannel, FEEDBACK_DURATION};
pub use share::{ShareDispatcher, ShareOutcome, SharePlatform, ShareRequest};
pub use shell::CardShell;
pub use timer::TimerHandle;
