//! Style value types: colours, strokes and text settings.

pub mod color;
pub mod line;
pub mod text;

pub use color::{Colour, NA_PACKED};
pub use line::{LineEnd, LineJoin, LineStyle, LineType};
pub use text::{Alignment, FontFace};
