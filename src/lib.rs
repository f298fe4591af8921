//! dmlcanvas - a vector drawing device that writes DrawingML
//!
//! Shapes drawn on the device are encoded as DrawingML, the vector graphics
//! vocabulary of Office Open XML, and packed into the small OPC package
//! office applications accept from the clipboard. Pasting gives native,
//! editable shapes rather than a picture.
//!
//! # Features
//!
//! - **XML model**: a minimal element tree with escaping and serialization
//! - **Drawing model**: rectangles, lines, circles, polylines, polygons and
//!   rotated text with per-shape styling
//! - **DrawingML encoder**: EMU conversion, flips, rotation, colour, alpha
//!   and dash encoding, freeform paths and rotated text anchoring
//! - **Packaging**: the five clipboard parts and a zip archive writer
//!   (`zip` feature, on by default)
//! - **Text metrics**: pluggable; a fixed-advance approximation is built in
//!   and system fonts are available with the `fonts` feature
//!
//! # Example - Encoding a session directly
//!
//! ```
//! use dmlcanvas::drawing::{Attributes, DrawingSession, Point};
//!
//! let mut session = DrawingSession::begin(200.0, 100.0);
//! let id = session.append_rect(Point::new(10.0, 10.0), Point::new(60.0, 40.0), Attributes::default());
//! assert_eq!(id, 2);
//!
//! let parts = session.end();
//! assert_eq!(parts.len(), 5);
//! let drawing = parts.get("clipboard/drawings/drawing1.xml").unwrap();
//! assert!(drawing.contains(r#"<a:prstGeom prst="rect"/>"#));
//! ```
//!
//! # Example - Driving the device
//!
//! ```
//! use dmlcanvas::clipboard::MemoryClipboard;
//! use dmlcanvas::config::DeviceOptions;
//! use dmlcanvas::device::Device;
//! use dmlcanvas::drawing::{GraphicsContext, Point};
//! use dmlcanvas::fonts::FixedMetrics;
//! use dmlcanvas::ooxml::ZipArchiveWriter;
//!
//! # fn main() -> dmlcanvas::Result<()> {
//! let mut device = Device::new(DeviceOptions::default(), FixedMetrics::default());
//! let gc = GraphicsContext::default();
//! device.new_page();
//! device.polygon(&[Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(25.0, 40.0)], &gc)?;
//!
//! let mut clipboard = MemoryClipboard::new();
//! assert!(device.close(&mut ZipArchiveWriter::new(), &mut clipboard)?);
//! # Ok(())
//! # }
//! ```

pub mod clipboard;
pub mod common;
pub mod config;
pub mod device;
pub mod drawing;
pub mod error;
pub mod fonts;
pub mod ooxml;

pub use config::DeviceOptions;
pub use device::Device;
pub use error::{DrawingError, Result};
