//! Pixel buffer that rasterized graphics are composited into.
//!
//! Row-major RGB, three bytes per pixel, with y = 0 as the top row. Writes
//! are last-write-wins; there is no blending.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Bytes per RGB pixel.
const BYTES_PER_PIXEL: usize = 3;

/// RGB framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB pixels in row-major order, `[R, G, B]` per pixel.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// All-black buffer of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] when either side is zero.
    ///
    /// ```
    /// use raster_kit::color::Rgb;
    /// use raster_kit::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(64, 48)?;
    /// assert_eq!(fb.pixel_count(), 64 * 48);
    /// assert_eq!(fb.get_pixel(63, 47), Some(Rgb::BLACK));
    /// # Ok::<(), raster_kit::Error>(())
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Backing RGB bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB bytes of row `y`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let stride = (self.width as usize) * BYTES_PER_PIXEL;
        self.pixels.chunks_exact(stride).nth(y as usize)
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Color at `(x, y)`, or `None` off the canvas.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let idx = self.index_of(x, y)?;
        Some(Rgb::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]))
    }

    /// Set the color at a signed pixel coordinate.
    ///
    /// Does nothing if the coordinates fall outside the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
        }
    }

    /// Paint every point in order, skipping off-canvas ones.
    pub fn plot(&mut self, points: &[Point], color: Rgb) {
        for p in points {
            self.set_pixel(p.x, p.y, color);
        }
    }

    /// Count pixels that currently hold `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgb = color.to_array();
        self.pixels.chunks_exact(BYTES_PER_PIXEL).filter(|c| *c == rgb).count()
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL)
    }

    /// Owned copy of the pixel bytes with no row padding.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}
