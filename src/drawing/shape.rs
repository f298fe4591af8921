//! Drawable shapes.
//!
//! Coordinates are in points with y growing downwards, the same space the
//! host draws in. Every shape carries a numeric id, unique within its
//! drawing, and a display name that may be empty.

use crate::common::Alignment;

use super::attributes::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of a point set, as `(min, max)` corners.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = *points.first()?;
    Some(points.iter().skip(1).fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}

/// Container whose children share its coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub children: Vec<Shape>,
}

impl Group {
    /// An empty group anchored at the origin.
    pub fn new(id: u32, name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id,
            name: name.into(),
            origin: Point::default(),
            width,
            height,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Shape>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub id: u32,
    pub name: String,
    pub from: Point,
    pub to: Point,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: u32,
    pub name: String,
    pub from: Point,
    pub to: Point,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: u32,
    pub name: String,
    pub center: Point,
    pub radius: f64,
    pub attributes: Attributes,
}

/// Open path through `points`. Fewer than two points draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub id: u32,
    pub name: String,
    pub points: Vec<Point>,
    pub attributes: Attributes,
}

/// Closed, filled path through `points`. Fewer than two points draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub id: u32,
    pub name: String,
    pub points: Vec<Point>,
    pub attributes: Attributes,
}

/// A single run of text in an unrotated box; `attributes.rotation` turns the
/// box about its centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub id: u32,
    pub name: String,
    pub from: Point,
    pub to: Point,
    pub text: String,
    pub align: Alignment,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Group(Group),
    Rect(Rect),
    Line(Line),
    Circle(Circle),
    Polyline(Polyline),
    Polygon(Polygon),
    Text(Text),
}

impl Shape {
    pub fn id(&self) -> u32 {
        match self {
            Shape::Group(s) => s.id,
            Shape::Rect(s) => s.id,
            Shape::Line(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Polyline(s) => s.id,
            Shape::Polygon(s) => s.id,
            Shape::Text(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Shape::Group(s) => &s.name,
            Shape::Rect(s) => &s.name,
            Shape::Line(s) => &s.name,
            Shape::Circle(s) => &s.name,
            Shape::Polyline(s) => &s.name,
            Shape::Polygon(s) => &s.name,
            Shape::Text(s) => &s.name,
        }
    }

    /// Style snapshot; groups have none.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Shape::Group(_) => None,
            Shape::Rect(s) => Some(&s.attributes),
            Shape::Line(s) => Some(&s.attributes),
            Shape::Circle(s) => Some(&s.attributes),
            Shape::Polyline(s) => Some(&s.attributes),
            Shape::Polygon(s) => Some(&s.attributes),
            Shape::Text(s) => Some(&s.attributes),
        }
    }

    /// Polylines and polygons with fewer than two points produce no markup.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Polyline(s) => s.points.len() < 2,
            Shape::Polygon(s) => s.points.len() < 2,
            _ => false,
        }
    }
}
