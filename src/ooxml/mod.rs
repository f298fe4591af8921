//! Office Open XML (OOXML) output.
//!
//! The module is organized into two layers:
//!
//! 1. **DrawingML** (`drawings`): shape encoders producing element trees
//! 2. **Packaging** (`opc`, `container`): part names, the five clipboard
//!    parts and the archive writer that packs them
pub mod container;
pub mod drawings;
pub mod opc;

pub use container::{PackagePart, PackageParts, assemble};
pub use opc::ArchiveWriter;
#[cfg(feature = "zip")]
pub use opc::ZipArchiveWriter;
