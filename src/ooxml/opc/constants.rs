/// Constant values for the clipboard package.
///
/// This module contains the content type URIs, XML namespaces, relationship
/// types and part names a DrawingML clipboard package is built from.

/// Content type URIs (like MIME-types) that specify a part's format
pub mod content_type {
    pub const OFC_DRAWING: &str = "application/vnd.openxmlformats-officedocument.drawing+xml";
    pub const OFC_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const OPC_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

    // Generic XML
    pub const XML: &str = "application/xml";
}

/// XML namespace URIs
pub mod namespace {
    /// DrawingML main namespace, bound to the `a` prefix
    pub const DML_MAIN: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Locked canvas namespace, bound to the `lc` prefix. Also used as the
    /// `graphicData` URI.
    pub const DML_LOCKED_CANVAS: &str =
        "http://schemas.openxmlformats.org/drawingml/2006/lockedCanvas";

    /// OPC relationships namespace
    pub const OPC_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// OPC content types namespace
    pub const OPC_CONTENT_TYPES: &str =
        "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Relationship type URIs
pub mod relationship_type {
    pub const DRAWING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

/// Part names, as archive member names (no leading slash).
pub mod part_name {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const PACKAGE_RELS: &str = "_rels/.rels";
    pub const DRAWING_RELS: &str = "clipboard/drawings/_rels/drawing1.xml.rels";
    pub const THEME: &str = "clipboard/theme/theme1.xml";
    pub const DRAWING: &str = "clipboard/drawings/drawing1.xml";
}
