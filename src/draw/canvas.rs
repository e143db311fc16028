//! Offscreen raster canvas backed by a Cairo image surface.

use super::geometry::Point2D;

/// An ARGB32 image surface with a fixed pixel size.
///
/// The canvas owns the surface; drawing happens through short-lived Cairo
/// contexts created with [`Canvas::context`]. Dropping the context before
/// reading pixels back keeps the surface exclusively borrowed, which
/// [`Canvas::pixel_at`] requires.
#[derive(Debug)]
pub struct Canvas {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Allocates a canvas of the given pixel dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Creates a fresh drawing context bound to the surface.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Clears the whole surface to a solid background color.
    pub fn clear(&self, background: [f64; 4]) -> Result<(), cairo::Error> {
        let ctx = self.context()?;
        super::render::clear_canvas(&ctx, background);
        Ok(())
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The geometric center of the surface.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Encodes the current surface contents as PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, cairo::IoError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Reads back one pixel as `[r, g, b, a]`.
    ///
    /// Channels are premultiplied by alpha, which makes no difference for
    /// the opaque rendering this crate produces. Returns `None` outside the
    /// surface or while a context still borrows it.
    pub fn pixel_at(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let argb = u32::from_ne_bytes(data[offset..offset + 4].try_into().ok()?);

        Some([
            ((argb >> 16) & 0xff) as u8,
            ((argb >> 8) & 0xff) as u8,
            (argb & 0xff) as u8,
            ((argb >> 24) & 0xff) as u8,
        ])
    }
}
