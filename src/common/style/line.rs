//! Stroke styles.

/// Dash pattern of a stroke.
///
/// `Blank` means "draw no stroke". DrawingML renderers handle a missing
/// `a:ln` inconsistently, so blank strokes are written as zero-width
/// solid lines instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineType {
    Blank,
    #[default]
    Solid,
    Dashed,
    Dotted,
    DotDash,
    LongDash,
    TwoDash,
}

impl LineType {
    /// Decode the host's packed dash code (nibbles of on/off lengths).
    ///
    /// Unknown patterns fall back to solid.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Blank,
            0 => Self::Solid,
            0x44 => Self::Dashed,
            0x31 => Self::Dotted,
            0x3431 => Self::DotDash,
            0x37 => Self::LongDash,
            0x2622 => Self::TwoDash,
            _ => Self::Solid,
        }
    }

    /// `a:prstDash/@val` keyword.
    pub fn preset_dash(&self) -> &'static str {
        match self {
            Self::Blank | Self::Solid => "solid",
            Self::Dashed => "dash",
            Self::Dotted => "sysDot",
            Self::DotDash => "dashDot",
            Self::LongDash => "lgDash",
            Self::TwoDash => "lgDashDot",
        }
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Line end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnd {
    #[default]
    Round,
    Butt,
    Square,
}

impl LineEnd {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Butt,
            3 => Self::Square,
            _ => Self::Round,
        }
    }
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    #[default]
    Round,
    Mitre,
    Bevel,
}

impl LineJoin {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Mitre,
            3 => Self::Bevel,
            _ => Self::Round,
        }
    }
}

/// Complete stroke description. Width is in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub line_type: LineType,
    pub width: f64,
    pub end: LineEnd,
    pub join: LineJoin,
    pub mitre: f64,
}

impl LineStyle {
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Width actually written to markup: zero for blank strokes.
    #[inline]
    pub fn effective_width(&self) -> f64 {
        if self.line_type.is_blank() { 0.0 } else { self.width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_type: LineType::Solid,
            width: 1.0,
            end: LineEnd::Round,
            join: LineJoin::Round,
            mitre: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(LineType::from_code(-1), LineType::Blank);
        assert_eq!(LineType::from_code(0), LineType::Solid);
        assert_eq!(LineType::from_code(4 + (4 << 4)), LineType::Dashed);
        assert_eq!(LineType::from_code(1 + (3 << 4)), LineType::Dotted);
        assert_eq!(LineType::from_code(1 + (3 << 4) + (4 << 8) + (3 << 12)), LineType::DotDash);
        assert_eq!(LineType::from_code(7 + (3 << 4)), LineType::LongDash);
        assert_eq!(LineType::from_code(2 + (2 << 4) + (6 << 8) + (2 << 12)), LineType::TwoDash);
        assert_eq!(LineType::from_code(0x1234), LineType::Solid);
    }

    #[test]
    fn test_preset_dash_keywords() {
        let table = [
            (LineType::Blank, "solid"),
            (LineType::Solid, "solid"),
            (LineType::Dashed, "dash"),
            (LineType::Dotted, "sysDot"),
            (LineType::DotDash, "dashDot"),
            (LineType::LongDash, "lgDash"),
            (LineType::TwoDash, "lgDashDot"),
        ];
        for (lt, keyword) in table {
            assert_eq!(lt.preset_dash(), keyword, "{:?}", lt);
        }
    }

    #[test]
    fn test_blank_forces_zero_width() {
        let style = LineStyle {
            line_type: LineType::Blank,
            width: 3.0,
            ..LineStyle::default()
        };
        assert_eq!(style.effective_width(), 0.0);
        assert_eq!(LineStyle::solid(2.5).effective_width(), 2.5);
    }

    #[test]
    fn test_cap_and_join_codes() {
        assert_eq!(LineEnd::from_code(1), LineEnd::Round);
        assert_eq!(LineEnd::from_code(2), LineEnd::Butt);
        assert_eq!(LineEnd::from_code(3), LineEnd::Square);
        assert_eq!(LineJoin::from_code(2), LineJoin::Mitre);
        assert_eq!(LineJoin::from_code(3), LineJoin::Bevel);
        assert_eq!(LineJoin::from_code(9), LineJoin::Round);
    }
}
