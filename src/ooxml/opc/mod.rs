/// Open Packaging Conventions (OPC) pieces needed for clipboard packages.
///
/// A clipboard package is a fixed set of parts: content types, package
/// relationships, the drawing, its relationships and the theme. This module
/// holds the names and URIs those parts use and the writer that packs them
/// into a single archive.

pub mod constants;
pub mod pkgwriter;

pub use pkgwriter::ArchiveWriter;
#[cfg(feature = "zip")]
pub use pkgwriter::ZipArchiveWriter;
