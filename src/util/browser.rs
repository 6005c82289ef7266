//! Clipboard, print, and confirm wrappers.
//!
//! Client-side (hydrate): real browser calls via `web-sys`.
//! Elsewhere: clipboard reports `Unavailable`, print is a no-op, and confirm
//! answers "no".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::notify::Notifier;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Copy `text` and confirm with a success banner.
///
/// # Errors
///
/// Returns an error (and shows nothing) when the write is refused.
pub async fn copy_to_clipboard(text: &str, notifier: &Notifier) -> Result<(), ClipboardError> {
    write_clipboard(text).await.inspect_err(|e| log::warn!("copy failed: {e}"))?;
    notifier.success(COPIED_MESSAGE);
    Ok(())
}

async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

/// Open the browser print dialog.
pub fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }
}

/// Ask the user to confirm a destructive action (cancel booking, remove driver).
pub fn confirm_action(message: Option<&str>) -> bool {
    let message = confirm_message(message);
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Prompt text, falling back to the default for a missing or empty message.
#[must_use]
pub fn confirm_message(message: Option<&str>) -> &str {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => DEFAULT_CONFIRM_MESSAGE,
    }
}
