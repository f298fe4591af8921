use super::node::XmlNode;

/// A complete XML document: the prolog plus a single root element.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    version: &'static str,
    encoding: &'static str,
    standalone: &'static str,
    root: XmlNode,
}

impl XmlDocument {
    /// A `version="1.0" encoding="UTF-8" standalone="yes"` document.
    pub fn new(root: XmlNode) -> Self {
        Self {
            version: "1.0",
            encoding: "UTF-8",
            standalone: "yes",
            root,
        }
    }

    #[inline]
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// Serialize the prolog and root. An empty root yields only the prolog.
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(r#"<?xml version=""#);
        out.push_str(self.version);
        out.push_str(r#"" encoding=""#);
        out.push_str(self.encoding);
        out.push_str(r#"" standalone=""#);
        out.push_str(self.standalone);
        out.push_str("\"?>\n");
        self.root.write_to(&mut out);
        out
    }
}
