//! Drawing model: shapes, their styling and the session that collects them.

pub mod attributes;
pub mod context;
pub mod layout;
pub mod session;
pub mod shape;

pub use attributes::Attributes;
pub use context::GraphicsContext;
pub use layout::{MIN_POINT_SIZE, layout_text};
pub use session::{CANVAS_GROUP_ID, DrawingSession, FIRST_SHAPE_ID, MAIN_GROUP_ID};
pub use shape::{Circle, Group, Line, Point, Polygon, Polyline, Rect, Shape, Text, bounding_box};
