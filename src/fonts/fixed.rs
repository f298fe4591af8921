use super::{FontError, FontRequest, TextExtents, TextMetrics};

/// Font-independent metrics: every character advances by the same fraction
/// of an em.
///
/// Useful when no font backend is available (headless hosts, tests). Boxes
/// come out roughly the right size and office applications re-flow the text
/// with the real font when the drawing is pasted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Advance per character, in ems.
    pub advance: f64,
    /// Ascent in ems.
    pub ascent: f64,
    /// Descent in ems, zero or negative.
    pub descent: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.75,
            descent: -0.25,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&mut self, request: &FontRequest<'_>, text: &str) -> Result<TextExtents, FontError> {
        if text.is_empty() {
            return Err(FontError::EmptyText);
        }

        let size = request.point_size;
        let chars = text.chars().count() as f64;
        Ok(TextExtents {
            width: chars * self.advance * size,
            ascent: self.ascent * size,
            descent: self.descent * size,
        })
    }
}
