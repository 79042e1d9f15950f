//! Clipboard access for revealed passwords.
//!
//! On X11 and Wayland the copied text only stays available while the
//! process holds the clipboard handle, so the handle lives as long as
//! the menu session.

use arboard::Clipboard;
use tracing::debug;

use crate::errors::{PwVaultError, Result};

/// A lazily opened clipboard handle kept for the session.
#[derive(Default)]
pub struct SessionClipboard {
    inner: Option<Clipboard>,
}

impl SessionClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` on the system clipboard.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => {
                let c = Clipboard::new().map_err(|e| PwVaultError::Clipboard(e.to_string()))?;
                debug!("clipboard opened");
                c
            }
        };

        self.inner
            .insert(clipboard)
            .set_text(text)
            .map_err(|e| PwVaultError::Clipboard(e.to_string()))
    }
}
