//! Text metrics capability.
//!
//! The drawing core never shapes or rasterizes text itself. It asks a
//! [`TextMetrics`] implementation for the advance width, ascent and descent
//! of a string in a given font, and lays text boxes out from those numbers.
//! Backends are injected when a [`Device`](crate::device::Device) is built.

use crate::common::FontFace;

pub mod fixed;
#[cfg(feature = "fonts")]
pub mod loader;

pub use fixed::FixedMetrics;
#[cfg(feature = "fonts")]
pub use loader::SystemFontMetrics;

/// The font a string should be measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRequest<'a> {
    pub family: &'a str,
    pub bold: bool,
    pub italic: bool,
    /// Size in points.
    pub point_size: f64,
    /// Text is UTF-8 rather than the host's native encoding.
    pub utf8: bool,
    /// Text uses the symbol font's private encoding.
    pub symbol: bool,
}

/// Measurement of a string, in points at the requested size.
///
/// `descent` is the offset of the lowest point below the baseline and is
/// zero or negative, so the total height is `ascent - descent`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextExtents {
    pub const ZERO: TextExtents = TextExtents {
        width: 0.0,
        ascent: 0.0,
        descent: 0.0,
    };

    #[inline]
    pub fn height(&self) -> f64 {
        self.ascent - self.descent
    }

    /// Nothing to draw: zero width or zero height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height() == 0.0
    }
}

/// Measures text for layout.
pub trait TextMetrics {
    /// Map the host's family request to a concrete family name.
    fn resolve_family(&self, requested: &str, face: FontFace) -> String {
        resolve_generic_family(requested, face).to_owned()
    }

    /// Measure `text` in the requested font.
    fn measure(&mut self, request: &FontRequest<'_>, text: &str) -> Result<TextExtents, FontError>;
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn resolve_family(&self, requested: &str, face: FontFace) -> String {
        (**self).resolve_family(requested, face)
    }

    fn measure(&mut self, request: &FontRequest<'_>, text: &str) -> Result<TextExtents, FontError> {
        (**self).measure(request, text)
    }
}

/// Resolve the host's generic family names to common installed fonts.
pub fn resolve_generic_family(requested: &str, face: FontFace) -> &str {
    if face.is_symbol() {
        return "Symbol";
    }
    match requested {
        "" | "sans" => "Arial",
        "serif" => "Times New Roman",
        "mono" => "Courier New",
        other => other,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font not found: {0}")]
    NotFound(String),
    #[error("Invalid font data")]
    InvalidData,
    #[error("Nothing to measure")]
    EmptyText,
}
