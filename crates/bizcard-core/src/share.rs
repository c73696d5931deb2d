//! Share the card with whatever the platform offers.
//!
//! Fallback order:
//!
//! 1. Native share sheet, if available. Success is [`ShareOutcome::Shared`];
//!    a user cancel is [`ShareOutcome::Cancelled`] and stays silent; any other
//!    failure falls through.
//! 2. Clipboard write of the URL: [`ShareOutcome::CopiedToClipboard`].
//! 3. Show the URL for manual copy: [`ShareOutcome::PromptedManualCopy`].
//!
//! If step 2 or 3 fails the outcome is [`ShareOutcome::Failed`].

use crate::config::{FeedbackTexts, ShareMetadata};
use crate::error::ShareError;

/// What to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl From<&ShareMetadata> for ShareRequest {
    fn from(meta: &ShareMetadata) -> Self {
        Self {
            title: meta.title.clone(),
            text: meta.text.clone(),
            url: meta.url.clone(),
        }
    }
}

/// Result of one share attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    CopiedToClipboard,
    PromptedManualCopy,
    Failed,
}

impl ShareOutcome {
    /// The status message for this outcome. `Cancelled` has none.
    pub fn feedback<'a>(&self, texts: &'a FeedbackTexts) -> Option<&'a str> {
        match self {
            ShareOutcome::Shared => Some(texts.share_success.as_str()),
            ShareOutcome::Cancelled => None,
            ShareOutcome::CopiedToClipboard => Some(texts.share_clipboard.as_str()),
            ShareOutcome::PromptedManualCopy => Some(texts.share_prompt.as_str()),
            ShareOutcome::Failed => Some(texts.share_error.as_str()),
        }
    }
}

/// Share-related capabilities of the host platform.
///
/// Futures returned here need not be `Send`; everything runs on the UI
/// event loop.
#[allow(async_fn_in_trait)]
pub trait SharePlatform {
    fn supports_native_share(&self) -> bool;

    /// Open the native share sheet. Return [`ShareError::Cancelled`] when the
    /// user dismisses it.
    async fn native_share(&self, request: &ShareRequest) -> Result<(), ShareError>;

    fn supports_clipboard(&self) -> bool;

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;

    /// Put `url` in front of the user so they can copy it by hand.
    fn prompt_manual_copy(&self, url: &str) -> Result<(), ShareError>;
}

/// Runs the share fallback chain against a [`SharePlatform`].
#[derive(Debug, Clone)]
pub struct ShareDispatcher<P> {
    platform: P,
}

impl<P: SharePlatform> ShareDispatcher<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub async fn share(&self, request: &ShareRequest) -> ShareOutcome {
        if self.platform.supports_native_share() {
            match self.platform.native_share(request).await {
                Ok(()) => return ShareOutcome::Shared,
                Err(ShareError::Cancelled) => {
                    tracing::debug!("Native share cancelled");
                    return ShareOutcome::Cancelled;
                }
                Err(e) => {
                    tracing::warn!("Native share failed, falling back: {}", e);
                }
            }
        }

        let fallback = if self.platform.supports_clipboard() {
            self.platform
                .write_clipboard(&request.url)
                .await
                .map(|()| ShareOutcome::CopiedToClipboard)
        } else {
            self.platform
                .prompt_manual_copy(&request.url)
                .map(|()| ShareOutcome::PromptedManualCopy)
        };

        fallback.unwrap_or_else(|e| {
            tracing::warn!("Share fallback failed: {}", e);
            ShareOutcome::Failed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> FeedbackTexts {
        FeedbackTexts {
            download: "download".into(),
            share_success: "shared".into(),
            share_clipboard: "copied".into(),
            share_prompt: "prompted".into(),
            share_error: "error".into(),
        }
    }

    #[test]
    fn every_outcome_but_cancel_has_distinct_feedback() {
        let texts = texts();
        let messages: Vec<_> = [
            ShareOutcome::Shared,
            ShareOutcome::CopiedToClipboard,
            ShareOutcome::PromptedManualCopy,
            ShareOutcome::Failed,
        ]
        .iter()
        .map(|o| o.feedback(&texts).unwrap())
        .collect();
        assert_eq!(messages, ["shared", "copied", "prompted", "error"]);
        assert_eq!(ShareOutcome::Cancelled.feedback(&texts), None);
    }

    #[test]
    fn request_from_metadata() {
        let meta = ShareMetadata {
            title: "T".into(),
            text: "X".into(),
            url: "https://card.test".into(),
        };
        let req = ShareRequest::from(&meta);
        assert_eq!(req.url, "https://card.test");
        assert_eq!(req.title, "T");
    }
}
