//! Shape encoders.
//!
//! Each shape maps to zero or more sibling nodes: degenerate paths map to
//! nothing, an empty group maps to its bare property nodes and every other
//! shape maps to exactly one `a:sp` or `a:grpSp`.

use crate::common::unit::pt_to_font_size;
use crate::common::xml::{XmlNode, escape_attr};
use crate::drawing::{
    Attributes, Circle, Group, Line, Point, Polygon, Polyline, Rect, Shape, Text, bounding_box,
};

use super::fill::{ln, no_fill, solid_fill};
use super::geometry::{Preset, cust_geom, prst_geom};
use super::xfrm::{group_xfrm, xfrm, xfrm_rect, xfrm_rect_rotated};

fn c_nv_pr(id: u32, name: &str) -> XmlNode {
    XmlNode::with_attrs(
        "a:cNvPr",
        [
            ("id", itoa::Buffer::new().format(id).to_owned()),
            ("name", escape_attr(name).into_owned()),
        ],
    )
}

fn nv_sp_pr(id: u32, name: &str, text_box: bool) -> XmlNode {
    let mut c_nv_sp_pr = XmlNode::new("a:cNvSpPr");
    if text_box {
        c_nv_sp_pr = c_nv_sp_pr.attr("txBox", "1");
    }
    XmlNode::new("a:nvSpPr")
        .child(c_nv_pr(id, name))
        .child(c_nv_sp_pr)
}

fn nv_grp_sp_pr(id: u32, name: &str) -> XmlNode {
    XmlNode::new("a:nvGrpSpPr")
        .child(c_nv_pr(id, name))
        .child(XmlNode::new("a:cNvGrpSpPr"))
}

fn sp(id: u32, name: &str, sp_pr: impl IntoIterator<Item = XmlNode>) -> XmlNode {
    XmlNode::new("a:sp")
        .child(nv_sp_pr(id, name, false))
        .child(XmlNode::new("a:spPr").children(sp_pr))
}

fn outline(attributes: &Attributes) -> XmlNode {
    ln(&attributes.line, attributes.stroke)
}

fn encode_group(group: &Group) -> Vec<XmlNode> {
    let nv = nv_grp_sp_pr(group.id, &group.name);
    let sp_pr = XmlNode::new("a:grpSpPr").child(group_xfrm(group.origin, group.width, group.height));

    if group.children.is_empty() {
        return vec![nv, sp_pr];
    }

    vec![
        XmlNode::new("a:grpSp")
            .child(nv)
            .child(sp_pr)
            .children(encode_shapes(&group.children)),
    ]
}

fn encode_rect(rect: &Rect) -> XmlNode {
    sp(
        rect.id,
        &rect.name,
        [
            xfrm_rect(rect.from, rect.to),
            prst_geom(Preset::Rect),
            solid_fill(rect.attributes.fill),
            outline(&rect.attributes),
        ],
    )
}

fn encode_line(line: &Line) -> XmlNode {
    sp(
        line.id,
        &line.name,
        [
            xfrm_rect(line.from, line.to),
            prst_geom(Preset::Line),
            outline(&line.attributes),
        ],
    )
}

fn encode_circle(circle: &Circle) -> XmlNode {
    let Circle { center, radius, .. } = *circle;
    sp(
        circle.id,
        &circle.name,
        [
            xfrm(center.x - radius, center.y - radius, 2.0 * radius, 2.0 * radius),
            prst_geom(Preset::Ellipse),
            solid_fill(circle.attributes.fill),
            outline(&circle.attributes),
        ],
    )
}

/// Placement and path for a freeform shape, or `None` without points.
fn freeform(points: &[Point], closed: bool) -> Option<(XmlNode, XmlNode)> {
    let (lo, hi) = bounding_box(points)?;
    let (width, height) = (hi.x - lo.x, hi.y - lo.y);
    Some((
        xfrm(lo.x, lo.y, width, height),
        cust_geom(points, lo, width, height, closed),
    ))
}

fn encode_polyline(polyline: &Polyline) -> Option<XmlNode> {
    let (placement, geometry) = freeform(&polyline.points, false)?;
    Some(sp(
        polyline.id,
        &polyline.name,
        [placement, geometry, outline(&polyline.attributes)],
    ))
}

fn encode_polygon(polygon: &Polygon) -> Option<XmlNode> {
    let (placement, geometry) = freeform(&polygon.points, true)?;
    Some(sp(
        polygon.id,
        &polygon.name,
        [
            placement,
            geometry,
            solid_fill(polygon.attributes.fill),
            outline(&polygon.attributes),
        ],
    ))
}

fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

fn encode_text(text: &Text) -> XmlNode {
    let attributes = &text.attributes;
    let typeface = escape_attr(&attributes.font_family).into_owned();

    let body_pr = XmlNode::with_attrs(
        "a:bodyPr",
        [
            ("wrap", "none"),
            ("lIns", "0"),
            ("tIns", "0"),
            ("rIns", "0"),
            ("bIns", "0"),
            ("anchor", "b"),
            ("anchorCtr", "1"),
        ],
    )
    .child(XmlNode::new("a:spAutoFit"));

    let r_pr = XmlNode::with_attrs(
        "a:rPr",
        [
            ("sz", itoa::Buffer::new().format(pt_to_font_size(attributes.point_size)).to_owned()),
            ("b", flag(attributes.bold).to_owned()),
            ("i", flag(attributes.italic).to_owned()),
            ("dirty", "0".to_owned()),
        ],
    )
    .child(solid_fill(attributes.stroke))
    .child(XmlNode::with_attrs("a:latin", [("typeface", typeface.clone())]))
    .child(XmlNode::with_attrs("a:cs", [("typeface", typeface)]));

    let paragraph = XmlNode::new("a:p")
        .child(XmlNode::with_attrs("a:pPr", [("algn", text.align.keyword())]))
        .child(
            XmlNode::new("a:r")
                .child(r_pr)
                .child(XmlNode::with_text("a:t", text.text.as_str())),
        );

    XmlNode::new("a:sp")
        .child(nv_sp_pr(text.id, &text.name, true))
        .child(
            XmlNode::new("a:spPr")
                .child(xfrm_rect_rotated(text.from, text.to, attributes.rotation))
                .child(prst_geom(Preset::Rect))
                .child(no_fill()),
        )
        .child(
            XmlNode::new("a:txSp")
                .child(XmlNode::new("a:txBody").child(body_pr).child(paragraph))
                .child(XmlNode::new("a:useSpRect")),
        )
}

/// Encode one shape into its sibling nodes. Degenerate shapes encode to
/// nothing.
pub fn encode_shape(shape: &Shape) -> Vec<XmlNode> {
    if shape.is_degenerate() {
        return Vec::new();
    }
    match shape {
        Shape::Group(group) => encode_group(group),
        Shape::Rect(rect) => vec![encode_rect(rect)],
        Shape::Line(line) => vec![encode_line(line)],
        Shape::Circle(circle) => vec![encode_circle(circle)],
        Shape::Polyline(polyline) => encode_polyline(polyline).into_iter().collect(),
        Shape::Polygon(polygon) => encode_polygon(polygon).into_iter().collect(),
        Shape::Text(text) => vec![encode_text(text)],
    }
}

/// Encode shapes in paint order.
pub fn encode_shapes(shapes: &[Shape]) -> Vec<XmlNode> {
    shapes.iter().flat_map(encode_shape).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::assert_well_formed;
    use crate::common::{Alignment, Colour, LineStyle, LineType};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn single(shape: Shape) -> XmlNode {
        let mut nodes = encode_shape(&shape);
        assert_eq!(nodes.len(), 1);
        nodes.remove(0)
    }

    fn sp_pr_children(node: &XmlNode) -> Vec<&str> {
        node.find("a:spPr")
            .unwrap()
            .child_nodes()
            .iter()
            .map(XmlNode::name)
            .collect()
    }

    #[test]
    fn test_rect_markup() {
        let attributes = Attributes::default()
            .with_fill(Colour::rgb(0, 128, 255))
            .with_line(LineStyle::solid(2.0));
        let node = single(Shape::Rect(Rect {
            id: 2,
            name: String::new(),
            from: p(0.0, 0.0),
            to: p(72.0, 36.0),
            attributes,
        }));

        assert_eq!(node.name(), "a:sp");
        let c_nv_pr = node.find_path(&["a:nvSpPr", "a:cNvPr"]).unwrap();
        assert_eq!(c_nv_pr.attribute("id"), Some("2"));
        assert_eq!(c_nv_pr.attribute("name"), Some(""));
        assert_eq!(
            sp_pr_children(&node),
            ["a:xfrm", "a:prstGeom", "a:solidFill", "a:ln"]
        );
        let ext = node.find_path(&["a:spPr", "a:xfrm", "a:ext"]).unwrap();
        assert_eq!(ext.attribute("cx"), Some("914400"));
        assert_eq!(ext.attribute("cy"), Some("457200"));
        let clr = node.find_path(&["a:spPr", "a:solidFill", "a:srgbClr"]).unwrap();
        assert_eq!(clr.attribute("val"), Some("0080FF"));
        assert_well_formed(&node.to_xml());
    }

    #[test]
    fn test_line_has_no_fill() {
        let node = single(Shape::Line(Line {
            id: 3,
            name: String::new(),
            from: p(10.0, 0.0),
            to: p(0.0, 10.0),
            attributes: Attributes::default(),
        }));
        assert_eq!(sp_pr_children(&node), ["a:xfrm", "a:prstGeom", "a:ln"]);
        let xfrm = node.find_path(&["a:spPr", "a:xfrm"]).unwrap();
        assert_eq!(xfrm.attribute("flipH"), Some("1"));
        assert_eq!(xfrm.attribute("flipV"), None);
    }

    #[test]
    fn test_circle_bounds() {
        let node = single(Shape::Circle(Circle {
            id: 4,
            name: String::new(),
            center: p(10.0, 10.0),
            radius: 5.0,
            attributes: Attributes::default(),
        }));
        let off = node.find_path(&["a:spPr", "a:xfrm", "a:off"]).unwrap();
        assert_eq!(off.attribute("x"), Some("63500"));
        let ext = node.find_path(&["a:spPr", "a:xfrm", "a:ext"]).unwrap();
        assert_eq!(ext.attribute("cx"), Some("127000"));
        assert_eq!(
            node.find_path(&["a:spPr", "a:prstGeom"]).unwrap().attribute("prst"),
            Some("ellipse")
        );
    }

    #[test]
    fn test_blank_stroke() {
        let attributes = Attributes::default().with_line(LineStyle {
            line_type: LineType::Blank,
            ..LineStyle::default()
        });
        let node = single(Shape::Rect(Rect {
            id: 2,
            name: String::new(),
            from: p(0.0, 0.0),
            to: p(1.0, 1.0),
            attributes,
        }));
        let ln = node.find_path(&["a:spPr", "a:ln"]).unwrap();
        assert_eq!(ln.attribute("w"), Some("0"));
        assert_eq!(ln.find("a:prstDash").unwrap().attribute("val"), Some("solid"));
    }

    #[test]
    fn test_polyline_points() {
        let node = single(Shape::Polyline(Polyline {
            id: 5,
            name: String::new(),
            points: vec![p(0.0, 0.0), p(10.0, 5.0), p(20.0, 0.0), p(30.0, 5.0)],
            attributes: Attributes::default(),
        }));
        assert_eq!(sp_pr_children(&node), ["a:xfrm", "a:custGeom", "a:ln"]);
        let path = node
            .find_path(&["a:spPr", "a:custGeom", "a:pathLst", "a:path"])
            .unwrap();
        assert_eq!(path.child_nodes().len(), 4);
        assert_eq!(path.child_nodes()[0].name(), "a:moveTo");
    }

    #[test]
    fn test_polygon_closes_and_fills() {
        let node = single(Shape::Polygon(Polygon {
            id: 6,
            name: String::new(),
            points: vec![p(0.0, 0.0), p(10.0, 0.0), p(5.0, 8.0)],
            attributes: Attributes::default(),
        }));
        assert_eq!(
            sp_pr_children(&node),
            ["a:xfrm", "a:custGeom", "a:solidFill", "a:ln"]
        );
        let path = node
            .find_path(&["a:spPr", "a:custGeom", "a:pathLst", "a:path"])
            .unwrap();
        assert_eq!(path.child_nodes().len(), 4);
        assert_eq!(path.child_nodes()[3].name(), "a:close");
    }

    #[test]
    fn test_short_paths_encode_to_nothing() {
        let polyline = Shape::Polyline(Polyline {
            id: 7,
            name: String::new(),
            points: vec![p(1.0, 1.0)],
            attributes: Attributes::default(),
        });
        let polygon = Shape::Polygon(Polygon {
            id: 8,
            name: String::new(),
            points: Vec::new(),
            attributes: Attributes::default(),
        });
        assert!(encode_shape(&polyline).is_empty());
        assert!(encode_shape(&polygon).is_empty());
    }

    #[test]
    fn test_text_markup() {
        let attributes = Attributes {
            point_size: 12.5,
            bold: true,
            rotation: 45.0,
            font_family: "Times New Roman".to_string(),
            stroke: Colour::rgb(255, 0, 0),
            ..Attributes::default()
        };
        let node = single(Shape::Text(Text {
            id: 9,
            name: String::new(),
            from: p(0.0, 0.0),
            to: p(100.0, 20.0),
            text: "a < b & c".to_string(),
            align: Alignment::LEFT,
            attributes,
        }));

        let c_nv_sp_pr = node.find_path(&["a:nvSpPr", "a:cNvSpPr"]).unwrap();
        assert_eq!(c_nv_sp_pr.attribute("txBox"), Some("1"));
        assert_eq!(sp_pr_children(&node), ["a:xfrm", "a:prstGeom", "a:noFill"]);
        let xfrm = node.find_path(&["a:spPr", "a:xfrm"]).unwrap();
        assert_eq!(xfrm.attribute("rot"), Some("-2700000"));

        let body = node.find_path(&["a:txSp", "a:txBody"]).unwrap();
        let body_pr = body.find("a:bodyPr").unwrap();
        assert_eq!(body_pr.attribute("anchor"), Some("b"));
        assert_eq!(body_pr.attribute("wrap"), Some("none"));
        assert!(body_pr.find("a:spAutoFit").is_some());
        assert_eq!(
            body.find_path(&["a:p", "a:pPr"]).unwrap().attribute("algn"),
            Some("l")
        );

        let r_pr = body.find_path(&["a:p", "a:r", "a:rPr"]).unwrap();
        assert_eq!(r_pr.attribute("sz"), Some("1250"));
        assert_eq!(r_pr.attribute("b"), Some("1"));
        assert_eq!(r_pr.attribute("i"), Some("0"));
        assert_eq!(r_pr.find("a:latin").unwrap().attribute("typeface"), Some("Times New Roman"));
        assert_eq!(
            r_pr.find_path(&["a:solidFill", "a:srgbClr"]).unwrap().attribute("val"),
            Some("FF0000")
        );
        assert_eq!(body.find_path(&["a:p", "a:r", "a:t"]).unwrap().text(), "a < b & c");
        assert!(node.find_path(&["a:txSp", "a:useSpRect"]).is_some());

        let xml = node.to_xml();
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
        assert_well_formed(&xml);
    }

    #[test]
    fn test_text_size_rounds_to_hundredths() {
        let attributes = Attributes {
            point_size: 8.2,
            ..Attributes::default()
        };
        let node = single(Shape::Text(Text {
            id: 3,
            name: String::new(),
            from: p(0.0, 0.0),
            to: p(10.0, 10.0),
            text: "x".to_string(),
            align: Alignment::LEFT,
            attributes,
        }));
        let r_pr = node.find_path(&["a:txSp", "a:txBody", "a:p", "a:r", "a:rPr"]).unwrap();
        assert_eq!(r_pr.attribute("sz"), Some("820"));
    }

    #[test]
    fn test_names_are_attribute_escaped() {
        let node = single(Shape::Rect(Rect {
            id: 2,
            name: r#"say "hi" & <bye>"#.to_string(),
            from: p(0.0, 0.0),
            to: p(1.0, 1.0),
            attributes: Attributes::default(),
        }));
        assert_well_formed(&node.to_xml());
    }

    #[test]
    fn test_groups() {
        let empty = Group::new(0, "Canvas", 100.0, 50.0);
        let nodes = encode_shape(&Shape::Group(empty));
        let names: Vec<&str> = nodes.iter().map(XmlNode::name).collect();
        assert_eq!(names, ["a:nvGrpSpPr", "a:grpSpPr"]);

        let children = vec![
            Shape::Rect(Rect {
                id: 2,
                name: String::new(),
                from: p(0.0, 0.0),
                to: p(1.0, 1.0),
                attributes: Attributes::default(),
            }),
            Shape::Polyline(Polyline {
                id: 3,
                name: String::new(),
                points: vec![p(0.0, 0.0)],
                attributes: Attributes::default(),
            }),
        ];
        let group = Group::new(1, "MainGroup", 100.0, 50.0).with_children(children);
        let nodes = encode_shape(&Shape::Group(group));
        assert_eq!(nodes.len(), 1);
        let grp_sp = &nodes[0];
        assert_eq!(grp_sp.name(), "a:grpSp");
        let names: Vec<&str> = grp_sp.child_nodes().iter().map(XmlNode::name).collect();
        assert_eq!(names, ["a:nvGrpSpPr", "a:grpSpPr", "a:sp"]);
        assert_eq!(
            grp_sp.find_path(&["a:nvGrpSpPr", "a:cNvPr"]).unwrap().attribute("name"),
            Some("MainGroup")
        );
    }
}
