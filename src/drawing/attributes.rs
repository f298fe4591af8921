use crate::common::{Colour, LineEnd, LineJoin, LineStyle, LineType};

use super::context::GraphicsContext;

/// Style snapshot taken when a shape is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    /// Stroke colour, also used as the text colour.
    pub stroke: Colour,
    pub fill: Colour,
    pub line: LineStyle,
    pub point_size: f64,
    /// Horizontal adjustment in [0, 1]. Consumed by text layout and not
    /// written to markup.
    pub h_adjustment: f64,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
    pub bold: bool,
    pub italic: bool,
    /// Text uses the symbol font's private encoding.
    pub symbol: bool,
    pub font_family: String,
}

impl Attributes {
    /// Snapshot the host's graphics state. `font_family` is the already
    /// resolved family name.
    pub fn from_context(ctx: &GraphicsContext, font_family: impl Into<String>) -> Self {
        let face = ctx.face();
        Self {
            stroke: Colour::from_packed(ctx.col),
            fill: Colour::from_packed(ctx.fill),
            line: LineStyle {
                line_type: LineType::from_code(ctx.lty),
                width: ctx.lwd,
                end: LineEnd::from_code(ctx.lend),
                join: LineJoin::from_code(ctx.ljoin),
                mitre: ctx.lmitre,
            },
            point_size: ctx.point_size(),
            h_adjustment: 0.0,
            rotation: 0.0,
            bold: face.is_bold(),
            italic: face.is_italic(),
            symbol: face.is_symbol(),
            font_family: font_family.into(),
        }
    }

    pub fn with_fill(mut self, fill: Colour) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Colour) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            stroke: Colour::BLACK,
            fill: Colour::TRANSPARENT_WHITE,
            line: LineStyle::default(),
            point_size: 10.0,
            h_adjustment: 0.0,
            rotation: 0.0,
            bold: false,
            italic: false,
            symbol: false,
            font_family: "Arial".to_string(),
        }
    }
}
