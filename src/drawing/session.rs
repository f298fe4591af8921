use tracing::debug;

use crate::common::Alignment;
use crate::ooxml::container::{PackageParts, assemble};

use super::attributes::Attributes;
use super::shape::{Circle, Line, Point, Polygon, Polyline, Rect, Shape, Text};

/// Id of the synthetic empty "Canvas" group.
pub const CANVAS_GROUP_ID: u32 = 0;
/// Id of the synthetic "MainGroup" holding every drawn shape.
pub const MAIN_GROUP_ID: u32 = 1;
/// First id handed out to drawn shapes.
pub const FIRST_SHAPE_ID: u32 = 2;

/// One canvas lifetime: the canvas size and the shapes drawn on it, in
/// paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    width: f64,
    height: f64,
    next_id: u32,
    shapes: Vec<Shape>,
}

impl DrawingSession {
    /// Start a session on a `width` x `height` point canvas.
    pub fn begin(width: f64, height: f64) -> Self {
        debug!(width, height, "drawing session started");
        Self {
            width,
            height,
            next_id: FIRST_SHAPE_ID,
            shapes: Vec::new(),
        }
    }

    /// Discard every shape and restart ids on a new canvas.
    pub fn reset(&mut self, width: f64, height: f64) {
        *self = Self::begin(width, height);
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Id the next appended shape will receive.
    #[inline]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn append_rect(&mut self, from: Point, to: Point, attributes: Attributes) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Rect(Rect {
            id,
            name: String::new(),
            from,
            to,
            attributes,
        }));
        id
    }

    pub fn append_line(&mut self, from: Point, to: Point, attributes: Attributes) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Line(Line {
            id,
            name: String::new(),
            from,
            to,
            attributes,
        }));
        id
    }

    pub fn append_circle(&mut self, center: Point, radius: f64, attributes: Attributes) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Circle(Circle {
            id,
            name: String::new(),
            center,
            radius,
            attributes,
        }));
        id
    }

    pub fn append_polyline(&mut self, points: Vec<Point>, attributes: Attributes) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Polyline(Polyline {
            id,
            name: String::new(),
            points,
            attributes,
        }));
        id
    }

    pub fn append_polygon(&mut self, points: Vec<Point>, attributes: Attributes) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Polygon(Polygon {
            id,
            name: String::new(),
            points,
            attributes,
        }));
        id
    }

    /// Append a text box that has already been laid out (see
    /// [`layout_text`](super::layout::layout_text)).
    pub fn append_text(
        &mut self,
        from: Point,
        to: Point,
        text: impl Into<String>,
        align: Alignment,
        attributes: Attributes,
    ) -> u32 {
        let id = self.allocate_id();
        self.shapes.push(Shape::Text(Text {
            id,
            name: String::new(),
            from,
            to,
            text: text.into(),
            align,
            attributes,
        }));
        id
    }

    /// Close the session and build the clipboard package parts.
    pub fn end(self) -> PackageParts {
        debug!(shapes = self.shapes.len(), "drawing session ended");
        assemble(self.width, self.height, self.shapes)
    }
}
