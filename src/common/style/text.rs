//! Text styling shared by the model and the encoder.

/// Horizontal alignment expressed as the host's adjustment factor:
/// 0 is left, 0.5 centre and 1 right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment(pub f64);

impl Alignment {
    pub const LEFT: Alignment = Alignment(0.0);
    pub const CENTER: Alignment = Alignment(0.5);
    pub const RIGHT: Alignment = Alignment(1.0);

    /// `a:pPr/@algn` keyword.
    pub fn keyword(&self) -> &'static str {
        if self.0 <= 0.4 {
            "l"
        } else if self.0 <= 0.6 {
            "ctr"
        } else {
            "r"
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Font face as numbered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
    Symbol,
}

impl FontFace {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::Bold,
            3 => Self::Italic,
            4 => Self::BoldItalic,
            5 => Self::Symbol,
            _ => Self::Plain,
        }
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol)
    }
}
