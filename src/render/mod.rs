//! Rasterization algorithms.
//!
//! Every rasterizer maps control points to a list of integer pixels in
//! generation order. Nothing here knows about a pixel buffer; painting the
//! output is the job of [`Drawable`] and the [`Framebuffer`].
//!
//! # Algorithms
//!
//! - **DDA / Bresenham**: octant-normalized line stepping
//! - **Midpoint ellipse**: two-region decision variable, mirrored by quadrant
//! - **Bézier / B-spline**: adaptive parameter bisection
//!
//! [`Framebuffer`]: crate::framebuffer::Framebuffer

pub mod curve;
pub mod ellipse;
pub mod line;
pub mod polygon;

use crate::color::Rgb;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::graphic::Graphic;

/// Trait for things that can be painted into a framebuffer.
pub trait Drawable {
    /// Pixels to paint, in generation order.
    fn rasterize(&self) -> Vec<Point>;

    /// Color to paint them with.
    fn pen(&self) -> Rgb;

    /// Paint into `fb`, dropping pixels outside the canvas.
    fn draw_to(&self, fb: &mut Framebuffer) {
        fb.plot(&self.rasterize(), self.pen());
    }
}

impl Drawable for Graphic {
    fn rasterize(&self) -> Vec<Point> {
        self.draw()
    }

    fn pen(&self) -> Rgb {
        self.color()
    }
}
