use anyhow::{Context, Result};

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`. A handle is opened per write so headless
/// runs that never copy do not need a display server.
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("failed opening clipboard")?;
        clipboard
            .set_text(text.to_owned())
            .context("failed writing to clipboard")
    }
}
