use crate::common::unit::emu_str;
use crate::common::xml::XmlNode;
use crate::common::{Colour, LineStyle};

/// `a:solidFill` with an sRGB colour and its opacity.
pub fn solid_fill(colour: Colour) -> XmlNode {
    let alpha = itoa::Buffer::new().format(colour.alpha_percent()).to_owned();
    XmlNode::new("a:solidFill").child(
        XmlNode::with_attrs("a:srgbClr", [("val", colour.to_hex())])
            .child(XmlNode::with_attrs("a:alpha", [("val", alpha)])),
    )
}

#[inline]
pub fn no_fill() -> XmlNode {
    XmlNode::new("a:noFill")
}

/// `a:ln` outline. A blank line type is written as a zero-width solid line.
pub fn ln(line: &LineStyle, colour: Colour) -> XmlNode {
    XmlNode::with_attrs("a:ln", [("w", emu_str(line.effective_width()))])
        .child(solid_fill(colour))
        .child(XmlNode::with_attrs(
            "a:prstDash",
            [("val", line.line_type.preset_dash())],
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LineType;

    #[test]
    fn test_solid_fill_markup() {
        assert_eq!(
            solid_fill(Colour::rgba(255, 0, 0, 255)).to_xml(),
            r#"<a:solidFill><a:srgbClr val="FF0000"><a:alpha val="100000"/></a:srgbClr></a:solidFill>"#
        );
        let half = solid_fill(Colour::rgba(0, 0, 0, 128));
        let alpha = half.find_path(&["a:srgbClr", "a:alpha"]).unwrap();
        assert_eq!(alpha.attribute("val"), Some("50196"));
    }

    #[test]
    fn test_dashed_line() {
        let line = LineStyle {
            line_type: LineType::Dashed,
            width: 2.0,
            ..LineStyle::default()
        };
        let node = ln(&line, Colour::BLACK);
        assert_eq!(node.attribute("w"), Some("25400"));
        assert_eq!(node.find("a:prstDash").unwrap().attribute("val"), Some("dash"));
    }

    #[test]
    fn test_blank_line_is_zero_width_solid() {
        let line = LineStyle {
            line_type: LineType::Blank,
            width: 3.0,
            ..LineStyle::default()
        };
        let node = ln(&line, Colour::BLACK);
        assert_eq!(node.attribute("w"), Some("0"));
        assert_eq!(node.find("a:prstDash").unwrap().attribute("val"), Some("solid"));
        assert!(node.find("a:solidFill").is_some());
    }
}
