//! Card sections and overlays.

mod contact_actions;
mod feedback_toast;
mod gallery;
mod gallery_modal;
mod hero;
mod insights;
mod profile_lightbox;
mod share_prompt;
mod use_carousel;

pub use contact_actions::ContactActions;
pub use feedback_toast::FeedbackToast;
pub use gallery::Gallery;
pub use gallery_modal::GalleryModal;
pub use hero::Hero;
pub use insights::Insights;
pub use profile_lightbox::ProfileLightbox;
pub use share_prompt::SharePrompt;
