use crate::common::{Colour, FontFace};

/// Per-call graphics state as the host hands it over.
///
/// Colours are packed RGBA integers (see [`Colour::from_packed`]), line
/// type, end and join are the host's numeric codes, and the effective font
/// size is `ps * cex`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsContext {
    pub col: i32,
    pub fill: i32,
    pub lwd: f64,
    pub lty: i32,
    pub lend: i32,
    pub ljoin: i32,
    pub lmitre: f64,
    pub ps: f64,
    pub cex: f64,
    pub fontface: i32,
    pub fontfamily: String,
}

impl GraphicsContext {
    #[inline]
    pub fn point_size(&self) -> f64 {
        self.ps * self.cex
    }

    #[inline]
    pub fn face(&self) -> FontFace {
        FontFace::from_code(self.fontface)
    }
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self {
            col: Colour::BLACK.to_packed(),
            fill: Colour::TRANSPARENT_WHITE.to_packed(),
            lwd: 1.0,
            lty: 0,
            lend: 1,
            ljoin: 1,
            lmitre: 10.0,
            ps: 10.0,
            cex: 1.0,
            fontface: 1,
            fontfamily: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colours_unpack() {
        let ctx = GraphicsContext::default();
        assert_eq!(ctx.col, 0xFF00_0000_u32 as i32);
        assert_eq!(ctx.fill, 0x00FF_FFFF);
        assert_eq!(Colour::from_packed(ctx.col), Colour::BLACK);
        assert_eq!(Colour::from_packed(ctx.fill), Colour::TRANSPARENT_WHITE);
        assert_eq!(ctx.point_size(), 10.0);
    }
}
