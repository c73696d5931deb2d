//! Share fallback chain against a scripted platform
//!
//! Each test wires a fake platform, runs one share, and checks both the
//! outcome and the feedback messages it produced.

use std::cell::{Cell, RefCell};

use bizcard_core::{
    FeedbackChannel, FeedbackTexts, ShareDispatcher, ShareError, ShareOutcome, SharePlatform,
    ShareRequest,
};

/// Scripted platform capabilities
#[derive(Default)]
struct FakePlatform {
    native: Option<Result<(), ShareError>>,
    clipboard: Option<Result<(), ShareError>>,
    prompt: Option<Result<(), ShareError>>,
    native_calls: Cell<usize>,
    clipboard_writes: RefCell<Vec<String>>,
    prompted: RefCell<Vec<String>>,
}

impl SharePlatform for FakePlatform {
    fn supports_native_share(&self) -> bool {
        self.native.is_some()
    }

    async fn native_share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        self.native_calls.set(self.native_calls.get() + 1);
        self.native.clone().unwrap_or(Err(ShareError::Unsupported))
    }

    fn supports_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        self.clipboard_writes.borrow_mut().push(text.to_string());
        self.clipboard.clone().unwrap_or(Err(ShareError::Unsupported))
    }

    fn prompt_manual_copy(&self, url: &str) -> Result<(), ShareError> {
        self.prompted.borrow_mut().push(url.to_string());
        self.prompt.clone().unwrap_or(Ok(()))
    }
}

fn request() -> ShareRequest {
    ShareRequest {
        title: "Card".into(),
        text: "My card".into(),
        url: "https://card.test/jane".into(),
    }
}

fn texts() -> FeedbackTexts {
    FeedbackTexts {
        download: "download".into(),
        share_success: "shared".into(),
        share_clipboard: "copied".into(),
        share_prompt: "prompted".into(),
        share_error: "error".into(),
    }
}

/// Share once and push the outcome's message into a fresh feedback channel,
/// the way the card page does. Returns the outcome, how many messages were
/// shown, and the dispatcher for inspecting the platform afterwards.
async fn share_with_feedback(
    platform: FakePlatform,
) -> (ShareOutcome, usize, ShareDispatcher<FakePlatform>) {
    let feedback = FeedbackChannel::default();
    let mut rx = feedback.subscribe();
    rx.borrow_and_update();

    let dispatcher = ShareDispatcher::new(platform);
    let outcome = dispatcher.share(&request()).await;
    let texts = texts();
    if let Some(message) = outcome.feedback(&texts) {
        feedback.show(message);
    }

    let shown = usize::from(rx.has_changed().unwrap());
    (outcome, shown, dispatcher)
}

#[tokio::test]
async fn native_share_success() {
    let platform = FakePlatform {
        native: Some(Ok(())),
        clipboard: Some(Ok(())),
        ..Default::default()
    };
    let (outcome, shown, dispatcher) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(shown, 1);
    assert!(dispatcher.platform().clipboard_writes.borrow().is_empty());
}

#[tokio::test]
async fn native_share_cancel_is_silent() {
    let platform = FakePlatform {
        native: Some(Err(ShareError::Cancelled)),
        clipboard: Some(Ok(())),
        ..Default::default()
    };
    let (outcome, shown, dispatcher) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::Cancelled);
    assert_eq!(shown, 0);
    assert!(dispatcher.platform().clipboard_writes.borrow().is_empty(), "no fallback after cancel");
}

#[tokio::test]
async fn native_failure_falls_back_to_clipboard() {
    let platform = FakePlatform {
        native: Some(Err(ShareError::Failed("no targets".into()))),
        clipboard: Some(Ok(())),
        ..Default::default()
    };
    let (outcome, shown, dispatcher) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
    assert_eq!(shown, 1);
    assert_eq!(dispatcher.platform().native_calls.get(), 1);
}

#[tokio::test]
async fn no_native_share_copies_url_to_clipboard() {
    let platform = FakePlatform {
        clipboard: Some(Ok(())),
        ..Default::default()
    };
    let (outcome, shown, dispatcher) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
    assert_eq!(shown, 1);
    assert_eq!(dispatcher.platform().native_calls.get(), 0);
    assert_eq!(*dispatcher.platform().clipboard_writes.borrow(), ["https://card.test/jane"]);
}

#[tokio::test]
async fn no_clipboard_prompts_for_manual_copy() {
    let (outcome, shown, dispatcher) = share_with_feedback(FakePlatform::default()).await;
    assert_eq!(outcome, ShareOutcome::PromptedManualCopy);
    assert_eq!(shown, 1);
    assert_eq!(*dispatcher.platform().prompted.borrow(), ["https://card.test/jane"]);
}

#[tokio::test]
async fn clipboard_failure_is_reported() {
    let platform = FakePlatform {
        clipboard: Some(Err(ShareError::Failed("denied".into()))),
        ..Default::default()
    };
    let (outcome, shown, _) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::Failed);
    assert_eq!(shown, 1);
}

#[tokio::test]
async fn prompt_failure_is_reported() {
    let platform = FakePlatform {
        prompt: Some(Err(ShareError::Failed("no window".into()))),
        ..Default::default()
    };
    let (outcome, _, _) = share_with_feedback(platform).await;
    assert_eq!(outcome, ShareOutcome::Failed);
}

#[test]
fn dispatcher_needs_no_runtime() {
    let dispatcher = ShareDispatcher::new(FakePlatform {
        clipboard: Some(Ok(())),
        ..Default::default()
    });
    let outcome = futures::executor::block_on(dispatcher.share(&request()));
    assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
}
