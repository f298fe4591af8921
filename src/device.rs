//! The drawing device.
//!
//! [`Device`] is what a plotting host talks to: it receives drawing calls
//! with the host's graphics state, turns them into shapes in the current
//! [`DrawingSession`], and on close packs the drawing and puts it on the
//! clipboard.
//!
//! ```
//! use dmlcanvas::clipboard::MemoryClipboard;
//! use dmlcanvas::config::DeviceOptions;
//! use dmlcanvas::device::Device;
//! use dmlcanvas::drawing::GraphicsContext;
//! use dmlcanvas::fonts::FixedMetrics;
//! use dmlcanvas::ooxml::ZipArchiveWriter;
//!
//! # fn main() -> dmlcanvas::Result<()> {
//! let mut device = Device::new(DeviceOptions::new(4.0, 3.0), FixedMetrics::default());
//! let gc = GraphicsContext::default();
//!
//! device.new_page();
//! device.rect(10.0, 10.0, 100.0, 50.0, &gc)?;
//! device.text(20.0, 40.0, "Hello", 0.0, 0.0, &gc)?;
//!
//! let mut clipboard = MemoryClipboard::new();
//! device.close(&mut ZipArchiveWriter::new(), &mut clipboard)?;
//! assert_eq!(clipboard.format(), Some("Art::GVML ClipFormat"));
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::clipboard::{ClipboardTransport, send_drawing};
use crate::common::Alignment;
use crate::common::unit::FONT_HEIGHT_SCALAR;
use crate::config::DeviceOptions;
use crate::drawing::{Attributes, DrawingSession, GraphicsContext, Point, layout_text};
use crate::error::{DrawingError, Result};
use crate::fonts::{FontRequest, TextExtents, TextMetrics};
use crate::ooxml::ArchiveWriter;

/// Character metrics reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharMetrics {
    pub ascent: f64,
    /// Depth below the baseline, zero or positive.
    pub descent: f64,
    pub width: f64,
}

/// A DrawingML drawing device.
pub struct Device<M: TextMetrics> {
    options: DeviceOptions,
    metrics: M,
    session: Option<DrawingSession>,
}

impl<M: TextMetrics> Device<M> {
    /// Open a device. Invalid sizes in `options` fall back to the defaults.
    pub fn new(options: DeviceOptions, metrics: M) -> Self {
        let options = options.sanitized();
        debug!(
            width = options.width,
            height = options.height,
            point_size = options.point_size,
            "opening DrawingML device"
        );
        Self {
            options,
            metrics,
            session: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    /// Canvas size in points, as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (f64, f64) {
        self.options.canvas_size()
    }

    /// The current page, if one has been started.
    #[inline]
    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    /// Start a new page, discarding anything drawn so far.
    pub fn new_page(&mut self) {
        let (width, height) = self.size();
        match &mut self.session {
            Some(session) => session.reset(width, height),
            None => self.session = Some(DrawingSession::begin(width, height)),
        }
    }

    fn session_mut(&mut self) -> Result<&mut DrawingSession> {
        self.session.as_mut().ok_or(DrawingError::NoActiveSession)
    }

    fn attributes(&self, ctx: &GraphicsContext) -> Attributes {
        let family = self.metrics.resolve_family(&ctx.fontfamily, ctx.face());
        Attributes::from_context(ctx, family)
    }

    /// Measure `text` in the font described by `attributes`. Backend
    /// failures are logged and measure as nothing.
    pub fn measure_text(&mut self, attributes: &Attributes, text: &str) -> TextExtents {
        let request = FontRequest {
            family: &attributes.font_family,
            bold: attributes.bold,
            italic: attributes.italic,
            point_size: attributes.point_size,
            utf8: true,
            symbol: attributes.symbol,
        };
        self.measure_request(&request, text)
    }

    fn measure(&mut self, text: &str, ctx: &GraphicsContext) -> TextExtents {
        let face = ctx.face();
        let family = self.metrics.resolve_family(&ctx.fontfamily, face);
        let request = FontRequest {
            family: &family,
            bold: face.is_bold(),
            italic: face.is_italic(),
            point_size: ctx.point_size(),
            utf8: true,
            symbol: face.is_symbol(),
        };
        self.measure_request(&request, text)
    }

    fn measure_request(&mut self, request: &FontRequest<'_>, text: &str) -> TextExtents {
        match self.metrics.measure(request, text) {
            Ok(extents) => extents,
            Err(e) => {
                warn!(family = %request.family, error = %e, "cannot measure text");
                TextExtents::ZERO
            },
        }
    }

    /// Metrics of a single character. A negative `c` is a Unicode code
    /// point, a non-negative one a byte in the host's encoding.
    pub fn metric_info(&mut self, c: i32, ctx: &GraphicsContext) -> CharMetrics {
        let code = c.unsigned_abs();
        let Some(ch) = char::from_u32(code) else {
            return CharMetrics::default();
        };
        let mut buf = [0u8; 4];
        let extents = self.measure(ch.encode_utf8(&mut buf), ctx);
        CharMetrics {
            ascent: extents.ascent,
            descent: -extents.descent * FONT_HEIGHT_SCALAR,
            width: extents.width,
        }
    }

    /// Advance width of `text` in points.
    pub fn str_width(&mut self, text: &str, ctx: &GraphicsContext) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        self.measure(text, ctx).width
    }

    pub fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, ctx: &GraphicsContext) -> Result<u32> {
        let attributes = self.attributes(ctx);
        let session = self.session_mut()?;
        Ok(session.append_rect(Point::new(x0, y0), Point::new(x1, y1), attributes))
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, ctx: &GraphicsContext) -> Result<u32> {
        let attributes = self.attributes(ctx);
        let session = self.session_mut()?;
        Ok(session.append_line(Point::new(x1, y1), Point::new(x2, y2), attributes))
    }

    pub fn circle(&mut self, x: f64, y: f64, r: f64, ctx: &GraphicsContext) -> Result<u32> {
        let attributes = self.attributes(ctx);
        let session = self.session_mut()?;
        Ok(session.append_circle(Point::new(x, y), r, attributes))
    }

    /// Open path. Fewer than two points draws nothing and returns `None`.
    pub fn polyline(&mut self, points: &[Point], ctx: &GraphicsContext) -> Result<Option<u32>> {
        if points.len() < 2 {
            return Ok(None);
        }
        let attributes = self.attributes(ctx);
        let session = self.session_mut()?;
        Ok(Some(session.append_polyline(points.to_vec(), attributes)))
    }

    /// Closed, filled path. Fewer than two points draws nothing.
    pub fn polygon(&mut self, points: &[Point], ctx: &GraphicsContext) -> Result<Option<u32>> {
        if points.len() < 2 {
            return Ok(None);
        }
        let attributes = self.attributes(ctx);
        let session = self.session_mut()?;
        Ok(Some(session.append_polygon(points.to_vec(), attributes)))
    }

    /// Draw `text` anchored at `(x, y)` on its baseline, turned `rot`
    /// degrees counter-clockwise, with horizontal adjustment `hadj`.
    ///
    /// Returns `None` when there is nothing to draw: empty text, text below
    /// the minimum point size or text the backend could not measure.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        rot: f64,
        hadj: f64,
        ctx: &GraphicsContext,
    ) -> Result<Option<u32>> {
        if text.is_empty() {
            return Ok(None);
        }
        self.session_mut()?;

        let point_size = ctx.point_size();
        let extents = self.measure(text, ctx);
        let Some((from, to)) = layout_text(x, y, rot, hadj, point_size, &extents) else {
            if !extents.is_empty() {
                warn!(point_size, "text too small, not drawn");
            }
            return Ok(None);
        };

        let mut attributes = self.attributes(ctx).with_rotation(rot);
        // The adjustment is already folded into the box.
        attributes.h_adjustment = 0.0;
        let session = self.session_mut()?;
        Ok(Some(session.append_text(from, to, text, Alignment(hadj), attributes)))
    }

    /// Clipping region changes are accepted and ignored; DrawingML has no
    /// clipping.
    pub fn clip(&mut self, _x0: f64, _x1: f64, _y0: f64, _y1: f64) {}

    pub fn raster(&mut self) -> Result<()> {
        Err(unsupported("Raster"))
    }

    pub fn path(&mut self) -> Result<()> {
        Err(unsupported("Path"))
    }

    pub fn clip_path(&mut self) -> Result<()> {
        Err(unsupported("Clip path"))
    }

    pub fn mask(&mut self) -> Result<()> {
        Err(unsupported("Mask"))
    }

    pub fn pattern(&mut self) -> Result<()> {
        Err(unsupported("Pattern"))
    }

    /// Close the device: assemble the drawing, pack it with `archive` and
    /// hand it to `transport`.
    ///
    /// The metrics backend is released before packing, whatever the
    /// outcome. Closing without a page sends an empty canvas. Returns
    /// whether anything reached the transport.
    pub fn close<A, T>(self, archive: &mut A, transport: &mut T) -> Result<bool>
    where
        A: ArchiveWriter + ?Sized,
        T: ClipboardTransport + ?Sized,
    {
        let Device {
            options,
            metrics,
            session,
        } = self;
        drop(metrics);

        let session = session.unwrap_or_else(|| {
            let (width, height) = options.canvas_size();
            DrawingSession::begin(width, height)
        });
        let bytes = session.end().write_to(archive)?;
        send_drawing(transport, &bytes)
    }
}

fn unsupported(operation: &'static str) -> DrawingError {
    warn!(operation, "unsupported drawing operation");
    DrawingError::Unsupported(operation)
}
