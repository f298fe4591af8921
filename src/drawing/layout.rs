//! Placement of rotated text boxes.
//!
//! The host positions text by an anchor point on the baseline, a rotation
//! and a horizontal adjustment (0 = left edge, 0.5 = centre, 1 = right
//! edge). DrawingML instead wants the unrotated box and a rotation about its
//! centre, so the anchor has to be walked back to the box's top-left corner.

use crate::common::unit::FONT_HEIGHT_SCALAR;
use crate::fonts::TextExtents;

use super::shape::Point;

/// Text smaller than this is not drawn.
pub const MIN_POINT_SIZE: f64 = 0.5;

/// Move the baseline anchor down by the descent and scale the box height.
///
/// Returns `(y', height')`.
pub fn adjust_for_descent(y: f64, extents: &TextExtents) -> (f64, f64) {
    (
        y - extents.descent * FONT_HEIGHT_SCALAR,
        extents.height() * FONT_HEIGHT_SCALAR,
    )
}

/// Unrotated box of `width` x `height` whose point `width * hadj` along the
/// bottom edge sits on `(x, y)` once the box is turned by `rotation`
/// degrees about its centre.
///
/// Returns the `(top_left, bottom_right)` corners.
pub fn anchor_box(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    hadj: f64,
) -> (Point, Point) {
    let d = width * hadj;
    let half_w = 0.5 * width - d;
    let half_h = 0.5 * height;

    let rotate = rotation.to_radians();
    let diag = half_h.atan2(half_w);
    let hyp = half_h.hypot(half_w);
    let cx = (rotate + diag).cos() * hyp;
    let cy = -(rotate + diag).sin() * hyp;

    let tx = x + cx - 0.5 * width;
    let ty = y + cy - 0.5 * height;
    (Point::new(tx, ty), Point::new(tx + width, ty + height))
}

/// Full layout of one text run. `None` means there is nothing to draw.
pub fn layout_text(
    x: f64,
    y: f64,
    rotation: f64,
    hadj: f64,
    point_size: f64,
    extents: &TextExtents,
) -> Option<(Point, Point)> {
    if extents.is_empty() || point_size < MIN_POINT_SIZE {
        return None;
    }
    let (y, height) = adjust_for_descent(y, extents);
    Some(anchor_box(x, y, extents.width, height, rotation, hadj))
}
