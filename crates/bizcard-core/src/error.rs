//! Error types for the business card core

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// A carousel was asked to show a slide it does not have.
    ///
    /// This is a wiring defect, not a runtime condition to recover from.
    #[error("Invalid carousel index {index} (slide count {len})")]
    InvalidCarouselIndex { index: usize, len: usize },

    /// Card configuration failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// Card configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

/// Failure signal raised by a platform share, clipboard or prompt capability.
///
/// These never escape [`crate::share::ShareDispatcher`]; it folds them into a
/// [`crate::share::ShareOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the native share sheet
    #[error("Share cancelled by user")]
    Cancelled,

    /// The capability does not exist on this platform
    #[error("Share capability unsupported")]
    Unsupported,

    /// The capability exists but failed
    #[error("Share failed: {0}")]
    Failed(String),
}
