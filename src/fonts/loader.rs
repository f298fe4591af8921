use std::collections::HashMap;

use font_kit::family_name::FamilyName;
use font_kit::font::Font;
use font_kit::properties::{Properties, Style, Weight};
use font_kit::source::SystemSource;
use tracing::warn;

use crate::fonts::{FontError, FontRequest, TextExtents, TextMetrics};

const FALLBACK_FAMILY: &str = "Arial";

/// Metrics from the fonts installed on this system.
///
/// Loaded fonts are cached per family and style for the lifetime of the
/// value; dropping it releases them.
pub struct SystemFontMetrics {
    source: SystemSource,
    cache: HashMap<(String, bool, bool), Font>,
}

impl SystemFontMetrics {
    pub fn new() -> Self {
        Self {
            source: SystemSource::new(),
            cache: HashMap::new(),
        }
    }

    fn select(&self, family: &str, bold: bool, italic: bool) -> Result<Font, FontError> {
        let mut properties = Properties::new();
        if bold {
            properties.weight(Weight::BOLD);
        }
        if italic {
            properties.style(Style::Italic);
        }

        let handle = self
            .source
            .select_best_match(&[FamilyName::Title(family.to_string())], &properties)
            .map_err(|_| FontError::NotFound(family.to_string()))?;
        handle.load().map_err(|_| FontError::InvalidData)
    }

    fn load(&mut self, family: &str, bold: bool, italic: bool) -> Result<&Font, FontError> {
        let key = (family.to_string(), bold, italic);
        if !self.cache.contains_key(&key) {
            let font = match self.select(family, bold, italic) {
                Ok(font) => font,
                Err(e) if family != FALLBACK_FAMILY => {
                    warn!(family, error = %e, "cannot load font, falling back to {}", FALLBACK_FAMILY);
                    self.select(FALLBACK_FAMILY, bold, italic)?
                },
                Err(e) => return Err(e),
            };
            self.cache.insert(key.clone(), font);
        }
        self.cache
            .get(&key)
            .ok_or_else(|| FontError::NotFound(family.to_string()))
    }
}

impl Default for SystemFontMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for SystemFontMetrics {
    fn measure(&mut self, request: &FontRequest<'_>, text: &str) -> Result<TextExtents, FontError> {
        if text.is_empty() {
            return Err(FontError::EmptyText);
        }

        let font = self.load(request.family, request.bold, request.italic)?;
        let metrics = font.metrics();
        if metrics.units_per_em == 0 {
            return Err(FontError::InvalidData);
        }
        let scale = request.point_size / f64::from(metrics.units_per_em);

        let mut advance = 0.0f64;
        for c in text.chars() {
            let Some(glyph) = font.glyph_for_char(c) else {
                continue;
            };
            let v = font.advance(glyph).map_err(|_| FontError::InvalidData)?;
            advance += f64::from(v.x());
        }

        Ok(TextExtents {
            width: advance * scale,
            ascent: f64::from(metrics.ascent) * scale,
            descent: f64::from(metrics.descent.min(0.0)) * scale,
        })
    }
}
