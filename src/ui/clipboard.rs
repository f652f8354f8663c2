use crate::error::AppResult;
use arboard::Clipboard;

/// System clipboard, opened on first use.
///
/// On X11 and Wayland the copied text is served by this process, so the
/// handle lives as long as the app.
#[derive(Default)]
pub struct ClipboardHandle {
    inner: Option<Clipboard>,
}

impl ClipboardHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy(&mut self, text: &str) -> AppResult<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text.to_string())?;
        Ok(())
    }
}
