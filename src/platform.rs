//! Desktop side effects: external links, clipboard, the manual-copy prompt,
//! and saving the vCard to disk.

use std::io;
use std::path::PathBuf;

use bizcard_core::{vcard, LinkOpener, ShareError, SharePlatform, ShareRequest, VCardFields};
use dioxus::prelude::*;
use rfd::FileDialog;

/// The user's default browser.
///
/// The webview does not hand `window.open` to the OS, so links are opened
/// from Rust instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        tracing::info!("Opening external link {}", url);
        webbrowser::open(url)
    }
}

/// Open `url` in the system browser without blocking the UI. Failures are
/// logged.
pub fn open_external(url: &str) {
    let url = url.to_string();
    spawn(async move {
        match tokio::task::spawn_blocking(move || SystemBrowser.open(&url)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Failed to open link: {}", e),
            Err(e) => tracing::warn!("Link task failed: {}", e),
        }
    });
}

/// Share capabilities of the desktop shell.
///
/// There is no native share sheet. The clipboard goes through `arboard`;
/// without one, the URL is shown in an in-app dialog.
#[derive(Clone, Copy)]
pub struct DesktopSharePlatform {
    clipboard_available: bool,
    /// URL currently offered for manual copy, if the dialog is open
    prompt: Signal<Option<String>>,
}

impl DesktopSharePlatform {
    /// Probe the clipboard once; `prompt` drives the manual-copy dialog.
    pub fn detect(prompt: Signal<Option<String>>) -> Self {
        let clipboard_available = match arboard::Clipboard::new() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                false
            }
        };
        Self {
            clipboard_available,
            prompt,
        }
    }
}

impl SharePlatform for DesktopSharePlatform {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }

    fn supports_clipboard(&self) -> bool {
        self.clipboard_available
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ShareError::Failed(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ShareError::Failed(e.to_string()))
        })
        .await
        .map_err(|e| ShareError::Failed(e.to_string()))?
    }

    fn prompt_manual_copy(&self, url: &str) -> Result<(), ShareError> {
        let mut prompt = self.prompt;
        prompt.set(Some(url.to_string()));
        Ok(())
    }
}

/// Ask where to save the card, then write it.
///
/// Returns `Ok(None)` if the user cancelled the dialog.
pub async fn save_vcard(fields: VCardFields) -> anyhow::Result<Option<PathBuf>> {
    let suggested = fields.download_name.clone();
    let target = tokio::task::spawn_blocking(move || {
        let mut dialog = FileDialog::new()
            .add_filter("vCard", &["vcf"])
            .set_title("Save vCard")
            .set_file_name(suggested);
        if let Some(dir) = dirs::download_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    })
    .await?;

    let Some(target) = target else {
        return Ok(None);
    };

    let written = tokio::task::spawn_blocking(move || vcard::write_vcard(target, &fields)).await??;
    Ok(Some(written))
}
