//! Shape geometry: preset outlines and freeform paths.

use crate::common::unit::emu_str;
use crate::common::xml::XmlNode;
use crate::drawing::Point;

/// Preset geometry kinds this encoder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Rect,
    Line,
    Ellipse,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Rect => "rect",
            Preset::Line => "line",
            Preset::Ellipse => "ellipse",
        }
    }
}

pub fn prst_geom(preset: Preset) -> XmlNode {
    XmlNode::with_attrs("a:prstGeom", [("prst", preset.as_str())])
}

fn pt(p: Point, origin: Point) -> XmlNode {
    XmlNode::with_attrs(
        "a:pt",
        [("x", emu_str(p.x - origin.x)), ("y", emu_str(p.y - origin.y))],
    )
}

/// `a:custGeom` with a single path through `points`.
///
/// Points are written relative to `origin`, the top-left corner of their
/// bounding box, and the path canvas is `width` x `height`. A closed path
/// ends with `a:close`. Callers must pass at least one point.
pub fn cust_geom(points: &[Point], origin: Point, width: f64, height: f64, closed: bool) -> XmlNode {
    let mut path = XmlNode::with_attrs("a:path", [("w", emu_str(width)), ("h", emu_str(height))]);

    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.push(XmlNode::new("a:moveTo").child(pt(first, origin)));
    }
    for &p in iter {
        path.push(XmlNode::new("a:lnTo").child(pt(p, origin)));
    }
    if closed {
        path.push(XmlNode::new("a:close"));
    }

    XmlNode::new("a:custGeom")
        .child(XmlNode::new("a:avLst"))
        .child(XmlNode::new("a:gdLst"))
        .child(XmlNode::new("a:ahLst"))
        .child(XmlNode::new("a:cxnLst"))
        .child(XmlNode::new("a:pathLst").child(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keywords() {
        assert_eq!(prst_geom(Preset::Rect).to_xml(), r#"<a:prstGeom prst="rect"/>"#);
        assert_eq!(prst_geom(Preset::Line).attribute("prst"), Some("line"));
        assert_eq!(prst_geom(Preset::Ellipse).attribute("prst"), Some("ellipse"));
    }

    #[test]
    fn test_open_path_is_box_local() {
        let points = [Point::new(10.0, 20.0), Point::new(20.0, 30.0), Point::new(15.0, 25.0)];
        let geom = cust_geom(&points, Point::new(10.0, 20.0), 10.0, 10.0, false);

        let children: Vec<&str> = geom.child_nodes().iter().map(XmlNode::name).collect();
        assert_eq!(children, ["a:avLst", "a:gdLst", "a:ahLst", "a:cxnLst", "a:pathLst"]);

        let path = geom.find_path(&["a:pathLst", "a:path"]).unwrap();
        assert_eq!(path.attribute("w"), Some("127000"));
        assert_eq!(path.child_nodes().len(), 3);
        let start = path.find_path(&["a:moveTo", "a:pt"]).unwrap();
        assert_eq!(start.attribute("x"), Some("0"));
        assert_eq!(start.attribute("y"), Some("0"));
        assert!(path.find("a:close").is_none());
    }

    #[test]
    fn test_closed_path_appends_close() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let geom = cust_geom(&points, Point::default(), 1.0, 1.0, true);
        let path = geom.find_path(&["a:pathLst", "a:path"]).unwrap();
        assert_eq!(path.child_nodes().len(), 4);
        assert_eq!(path.child_nodes().last().map(XmlNode::name), Some("a:close"));
    }
}
