//! `a:xfrm` placement nodes.

use crate::common::unit::{degrees_to_rot, emu_str};
use crate::common::xml::XmlNode;
use crate::drawing::Point;

fn off(name: &'static str, x: f64, y: f64) -> XmlNode {
    XmlNode::with_attrs(name, [("x", emu_str(x)), ("y", emu_str(y))])
}

fn ext(name: &'static str, cx: f64, cy: f64) -> XmlNode {
    XmlNode::with_attrs(name, [("cx", emu_str(cx)), ("cy", emu_str(cy))])
}

/// Placement from an offset and an extent.
pub fn xfrm(x: f64, y: f64, width: f64, height: f64) -> XmlNode {
    XmlNode::new("a:xfrm")
        .child(off("a:off", x, y))
        .child(ext("a:ext", width, height))
}

/// Group placement whose child coordinate space equals its own.
pub fn group_xfrm(origin: Point, width: f64, height: f64) -> XmlNode {
    xfrm(origin.x, origin.y, width, height)
        .child(off("a:chOff", origin.x, origin.y))
        .child(ext("a:chExt", width, height))
}

fn flipped(from: Point, to: Point) -> XmlNode {
    let mut node = XmlNode::new("a:xfrm");
    if to.x < from.x {
        node = node.attr("flipH", "1");
    }
    if to.y < from.y {
        node = node.attr("flipV", "1");
    }
    node
}

fn with_bounds(node: XmlNode, from: Point, to: Point) -> XmlNode {
    node.child(off("a:off", from.x.min(to.x), from.y.min(to.y)))
        .child(ext("a:ext", (to.x - from.x).abs(), (to.y - from.y).abs()))
}

/// Placement of the box spanned by two corners. A corner pair running
/// right-to-left or bottom-to-top sets `flipH` / `flipV`.
pub fn xfrm_rect(from: Point, to: Point) -> XmlNode {
    with_bounds(flipped(from, to), from, to)
}

/// Like [`xfrm_rect`], turned counter-clockwise by `degrees` about the
/// box centre.
pub fn xfrm_rect_rotated(from: Point, to: Point, degrees: f64) -> XmlNode {
    let rot = itoa::Buffer::new().format(degrees_to_rot(degrees)).to_owned();
    with_bounds(flipped(from, to).attr("rot", rot), from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_plain_xfrm() {
        assert_eq!(
            xfrm(1.0, 2.0, 3.0, 4.0).to_xml(),
            r#"<a:xfrm><a:off x="12700" y="25400"/><a:ext cx="38100" cy="50800"/></a:xfrm>"#
        );
    }

    #[test]
    fn test_forward_rect_has_no_flip() {
        let node = xfrm_rect(p(0.0, 0.0), p(10.0, 5.0));
        assert_eq!(node.attributes().count(), 0);
        assert_eq!(node.find("a:ext").unwrap().attribute("cx"), Some("127000"));
    }

    #[test]
    fn test_reversed_corners_flip() {
        let node = xfrm_rect(p(10.0, 10.0), p(0.0, 0.0));
        assert_eq!(node.attribute("flipH"), Some("1"));
        assert_eq!(node.attribute("flipV"), Some("1"));
        let off = node.find("a:off").unwrap();
        assert_eq!(off.attribute("x"), Some("0"));
        assert_eq!(off.attribute("y"), Some("0"));
        let ext = node.find("a:ext").unwrap();
        assert_eq!(ext.attribute("cx"), Some("127000"));
        assert_eq!(ext.attribute("cy"), Some("127000"));
    }

    #[test]
    fn test_only_vertical_flip() {
        let node = xfrm_rect(p(0.0, 10.0), p(5.0, 0.0));
        assert_eq!(node.attribute("flipH"), None);
        assert_eq!(node.attribute("flipV"), Some("1"));
    }

    #[test]
    fn test_rotation_is_clockwise_units() {
        let node = xfrm_rect_rotated(p(0.0, 0.0), p(10.0, 10.0), 90.0);
        assert_eq!(node.attribute("rot"), Some("-5400000"));
        let node = xfrm_rect_rotated(p(0.0, 0.0), p(10.0, 10.0), 0.0);
        assert_eq!(node.attribute("rot"), Some("0"));
    }

    #[test]
    fn test_group_xfrm_has_child_space() {
        let node = group_xfrm(Point::default(), 100.0, 50.0);
        let names: Vec<&str> = node.child_nodes().iter().map(XmlNode::name).collect();
        assert_eq!(names, ["a:off", "a:ext", "a:chOff", "a:chExt"]);
        assert_eq!(node.find("a:chExt").unwrap().attribute("cx"), Some("1270000"));
    }
}
