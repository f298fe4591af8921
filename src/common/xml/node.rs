//! In-memory XML element tree.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::escape::escape_text;

type Name = Cow<'static, str>;

/// An XML element with ordered attributes, optional text and ordered children.
///
/// A node with an empty name is the "no node" sentinel and serializes to
/// nothing. Attribute values are written verbatim between double quotes;
/// text content is escaped on output.
///
/// # Examples
///
/// ```
/// use dmlcanvas::common::xml::XmlNode;
///
/// let node = XmlNode::new("a:xfrm")
///     .child(XmlNode::with_attrs("a:off", [("x", "0"), ("y", "0")]));
/// assert_eq!(node.to_xml(), r#"<a:xfrm><a:off x="0" y="0"/></a:xfrm>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    name: Name,
    attributes: SmallVec<[(Name, String); 4]>,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlNode {
    #[inline]
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The empty sentinel node.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_text(name: impl Into<Name>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_attrs<I, K, V>(name: impl Into<Name>, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Name>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_attrs_and_text<I, K, V>(
        name: impl Into<Name>,
        attrs: I,
        text: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Name>,
        V: Into<String>,
    {
        let mut node = Self::with_attrs(name, attrs);
        node.text = text.into();
        node
    }

    /// Append an attribute. Duplicates are kept in insertion order.
    pub fn attr(mut self, name: impl Into<Name>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, node: XmlNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = XmlNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn push(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// First value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn child_nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a path of direct-child names.
    pub fn find_path(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter().try_fold(self, |node, name| node.find(name))
    }

    /// Serialize this node and its descendants into `out`.
    pub fn write_to(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }

        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }

        if self.children.is_empty() && self.text.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str(&escape_text(&self.text));
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out);
        out
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}
