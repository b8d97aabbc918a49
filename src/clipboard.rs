//! System clipboard helpers: colors travel as hex text.

use thiserror::Error;

use crate::color::ColorRecord;
use crate::hex::HexParseError;

/// Error returned by the clipboard helpers.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened, read or written.
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    /// The clipboard text did not parse as a hex color.
    #[error("clipboard text is not a hex color: {0}")]
    Parse(#[from] HexParseError),
}

/// Put `color` on the clipboard as `#RRGGBB` or `#RRGGBBAA`.
pub fn copy_hex(color: ColorRecord, with_alpha: bool) -> Result<(), ClipboardError> {
    let text = color.to_hex(with_alpha);
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.as_str())?;
    tracing::debug!(hex = %text, "copied color to clipboard");
    Ok(())
}

/// Read a hex color from the clipboard.
pub fn paste_hex() -> Result<ColorRecord, ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    let text = clipboard.get_text()?;
    ColorRecord::try_from_hex(&text).map_err(|err| {
        tracing::warn!(%err, "clipboard text is not a hex color");
        ClipboardError::Parse(err)
    })
}
