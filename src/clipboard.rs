//! Clipboard hand-off.
//!
//! Placing bytes on the system clipboard is platform code; the device only
//! needs something that accepts a buffer under a named format.

use tracing::{debug, warn};

use crate::error::Result;

/// Registered clipboard format name office applications read DrawingML
/// drawings from.
pub const CLIPBOARD_FORMAT: &str = "Art::GVML ClipFormat";

/// Puts a finished archive on the clipboard.
pub trait ClipboardTransport {
    /// Replace the clipboard content with `data` under `format`.
    fn send(&mut self, format: &str, data: &[u8]) -> Result<()>;
}

impl<T: ClipboardTransport + ?Sized> ClipboardTransport for &mut T {
    fn send(&mut self, format: &str, data: &[u8]) -> Result<()> {
        (**self).send(format, data)
    }
}

impl<T: ClipboardTransport + ?Sized> ClipboardTransport for Box<T> {
    fn send(&mut self, format: &str, data: &[u8]) -> Result<()> {
        (**self).send(format, data)
    }
}

/// Send `data` as a DrawingML drawing. Empty buffers are not sent.
///
/// Returns whether anything was handed to the transport.
pub fn send_drawing<T: ClipboardTransport + ?Sized>(transport: &mut T, data: &[u8]) -> Result<bool> {
    if data.is_empty() {
        warn!("nothing to send to the clipboard");
        return Ok(false);
    }
    transport.send(CLIPBOARD_FORMAT, data)?;
    debug!(bytes = data.len(), "drawing sent to clipboard");
    Ok(true)
}

/// In-process clipboard. Keeps the last buffer sent to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    content: Option<(String, Vec<u8>)>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self) -> Option<&str> {
        self.content.as_ref().map(|(format, _)| format.as_str())
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.content.as_ref().map(|(_, data)| data.as_slice())
    }

    pub fn take(&mut self) -> Option<(String, Vec<u8>)> {
        self.content.take()
    }
}

impl ClipboardTransport for MemoryClipboard {
    fn send(&mut self, format: &str, data: &[u8]) -> Result<()> {
        self.content = Some((format.to_owned(), data.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawingError;

    #[test]
    fn test_send_uses_drawing_format() {
        let mut clipboard = MemoryClipboard::new();
        assert!(send_drawing(&mut clipboard, b"PK").unwrap());
        assert_eq!(clipboard.format(), Some("Art::GVML ClipFormat"));
        assert_eq!(clipboard.data(), Some(&b"PK"[..]));
    }

    #[test]
    fn test_empty_buffer_is_not_sent() {
        let mut clipboard = MemoryClipboard::new();
        assert!(!send_drawing(&mut clipboard, b"").unwrap());
        assert!(clipboard.take().is_none());
    }

    struct Locked;

    impl ClipboardTransport for Locked {
        fn send(&mut self, _format: &str, _data: &[u8]) -> Result<()> {
            Err(DrawingError::Clipboard("clipboard is locked".to_string()))
        }
    }

    #[test]
    fn test_transport_errors_propagate() {
        let mut boxed: Box<dyn ClipboardTransport> = Box::new(Locked);
        let err = send_drawing(&mut boxed, b"PK").unwrap_err();
        assert!(matches!(err, DrawingError::Clipboard(_)));
    }
}
