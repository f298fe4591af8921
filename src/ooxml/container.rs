//! Clipboard package assembly.
//!
//! A drawing on the clipboard is a small OPC package with five parts, in
//! this order:
//!
//! | Part | Content |
//! |------|---------|
//! | `[Content_Types].xml` | defaults for `rels` and `xml`, overrides for drawing and theme |
//! | `_rels/.rels` | `rId1` to the drawing |
//! | `clipboard/drawings/_rels/drawing1.xml.rels` | `rId1` to the theme |
//! | `clipboard/theme/theme1.xml` | empty `a:clipboardTheme` |
//! | `clipboard/drawings/drawing1.xml` | locked canvas holding the shapes |

use tracing::debug;

use crate::common::xml::{XmlDocument, XmlNode};
use crate::drawing::{CANVAS_GROUP_ID, Group, MAIN_GROUP_ID, Shape};
use crate::error::Result;

use super::drawings::encode_shape;
use super::opc::ArchiveWriter;
use super::opc::constants::{content_type as ct, namespace as ns, part_name, relationship_type as rt};

/// One named part of the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    /// Archive member name, without a leading slash.
    pub path: &'static str,
    pub xml: String,
}

/// The ordered parts of a clipboard package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageParts {
    parts: Vec<PackagePart>,
}

impl PackageParts {
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackagePart> {
        self.parts.iter()
    }

    /// Content of the part stored under `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|part| part.path == path)
            .map(|part| part.xml.as_str())
    }

    /// Pack every part, in order, and return the archive bytes.
    pub fn write_to<W: ArchiveWriter + ?Sized>(&self, archive: &mut W) -> Result<Vec<u8>> {
        for part in &self.parts {
            archive.add_part(part.path, part.xml.as_bytes())?;
        }
        archive.finish()
    }

    fn push(&mut self, path: &'static str, root: XmlNode) {
        self.parts.push(PackagePart {
            path,
            xml: XmlDocument::new(root).to_xml(),
        });
    }
}

impl IntoIterator for PackageParts {
    type Item = PackagePart;
    type IntoIter = std::vec::IntoIter<PackagePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a PackageParts {
    type Item = &'a PackagePart;
    type IntoIter = std::slice::Iter<'a, PackagePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

fn content_types() -> XmlNode {
    let default = |ext: &'static str, content_type: &'static str| {
        XmlNode::with_attrs("Default", [("Extension", ext), ("ContentType", content_type)])
    };
    let override_ = |part: &'static str, content_type: &'static str| {
        XmlNode::with_attrs(
            "Override",
            [("PartName", format!("/{part}")), ("ContentType", content_type.to_owned())],
        )
    };

    XmlNode::with_attrs("Types", [("xmlns", ns::OPC_CONTENT_TYPES)])
        .child(default("rels", ct::OPC_RELATIONSHIPS))
        .child(default("xml", ct::XML))
        .child(override_(part_name::DRAWING, ct::OFC_DRAWING))
        .child(override_(part_name::THEME, ct::OFC_THEME))
}

fn relationships(reltype: &'static str, target: &'static str) -> XmlNode {
    XmlNode::with_attrs("Relationships", [("xmlns", ns::OPC_RELATIONSHIPS)]).child(
        XmlNode::with_attrs(
            "Relationship",
            [("Id", "rId1"), ("Type", reltype), ("Target", target)],
        ),
    )
}

fn theme() -> XmlNode {
    XmlNode::with_attrs("a:clipboardTheme", [("xmlns:a", ns::DML_MAIN)])
}

fn drawing(width: f64, height: f64, shapes: Vec<Shape>) -> XmlNode {
    let canvas = Shape::Group(Group::new(CANVAS_GROUP_ID, "Canvas", width, height));
    let main = Shape::Group(Group::new(MAIN_GROUP_ID, "MainGroup", width, height).with_children(shapes));

    let locked_canvas = XmlNode::with_attrs("lc:lockedCanvas", [("xmlns:lc", ns::DML_LOCKED_CANVAS)])
        .children(encode_shape(&canvas))
        .children(encode_shape(&main));

    XmlNode::with_attrs("a:graphic", [("xmlns:a", ns::DML_MAIN)]).child(
        XmlNode::with_attrs("a:graphicData", [("uri", ns::DML_LOCKED_CANVAS)]).child(locked_canvas),
    )
}

/// Build the five package parts for a `width` x `height` point canvas.
///
/// The shapes are wrapped in the "MainGroup" group (id 1), preceded by the
/// empty "Canvas" group (id 0).
pub fn assemble(width: f64, height: f64, shapes: Vec<Shape>) -> PackageParts {
    debug!(width, height, shapes = shapes.len(), "assembling clipboard package");

    let mut parts = PackageParts::default();
    parts.push(part_name::CONTENT_TYPES, content_types());
    parts.push(part_name::PACKAGE_RELS, relationships(rt::DRAWING, part_name::DRAWING));
    parts.push(part_name::DRAWING_RELS, relationships(rt::THEME, "../theme/theme1.xml"));
    parts.push(part_name::THEME, theme());
    parts.push(part_name::DRAWING, drawing(width, height, shapes));
    parts
}
