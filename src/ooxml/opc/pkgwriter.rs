//! Package writer for clipboard packages.
//!
//! The assembler only produces named XML parts; turning them into a single
//! archive buffer is the job of an [`ArchiveWriter`]. The zip-backed
//! implementation is [`ZipArchiveWriter`].

use crate::error::Result;

/// Sink that packs named parts into one in-memory archive.
///
/// Parts are added in the order the package lists them; `finish` returns
/// the complete archive.
pub trait ArchiveWriter {
    /// Add one part. `name` is the archive member name, without a leading
    /// slash.
    fn add_part(&mut self, name: &str, data: &[u8]) -> Result<()>;

    /// Complete the archive and return its bytes.
    fn finish(&mut self) -> Result<Vec<u8>>;
}

impl<T: ArchiveWriter + ?Sized> ArchiveWriter for &mut T {
    fn add_part(&mut self, name: &str, data: &[u8]) -> Result<()> {
        (**self).add_part(name, data)
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        (**self).finish()
    }
}

#[cfg(feature = "zip")]
pub use self::zip_writer::ZipArchiveWriter;

#[cfg(feature = "zip")]
mod zip_writer {
    use std::io::{Cursor, Write};

    use zip::CompressionMethod;
    use zip::write::{SimpleFileOptions, ZipWriter};

    use super::ArchiveWriter;
    use crate::error::Result;

    /// Physical package writer backed by the `zip` crate.
    ///
    /// Writes to memory. After [`finish`](ArchiveWriter::finish) the writer
    /// starts over with an empty archive and can be reused.
    pub struct ZipArchiveWriter {
        archive: ZipWriter<Cursor<Vec<u8>>>,
        compression: CompressionMethod,
    }

    impl ZipArchiveWriter {
        /// Create a writer that deflates every part.
        pub fn new() -> Self {
            Self::with_compression(CompressionMethod::Deflated)
        }

        /// Create a writer that stores parts uncompressed.
        pub fn stored() -> Self {
            Self::with_compression(CompressionMethod::Stored)
        }

        fn with_compression(compression: CompressionMethod) -> Self {
            Self {
                archive: ZipWriter::new(Cursor::new(Vec::new())),
                compression,
            }
        }
    }

    impl Default for ZipArchiveWriter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ArchiveWriter for ZipArchiveWriter {
        fn add_part(&mut self, name: &str, data: &[u8]) -> Result<()> {
            let options = SimpleFileOptions::default().compression_method(self.compression);
            self.archive.start_file(name, options)?;
            self.archive.write_all(data)?;
            Ok(())
        }

        fn finish(&mut self) -> Result<Vec<u8>> {
            let archive = std::mem::replace(&mut self.archive, ZipWriter::new(Cursor::new(Vec::new())));
            let cursor = archive.finish()?;
            Ok(cursor.into_inner())
        }
    }

}
