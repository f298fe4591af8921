//! Common types shared by the drawing model and the DrawingML writer.

pub mod style;
pub mod unit;
pub mod xml;

pub use style::{Alignment, Colour, FontFace, LineEnd, LineJoin, LineStyle, LineType, NA_PACKED};
