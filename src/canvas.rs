//! Drawing surface holding graphics by id.
//!
//! Graphics live in a [`BTreeMap`] so rendering always paints in ascending
//! id order; a later id overwrites an earlier one where they overlap. Id
//! `-1` names a temporary graphic that is painted by the next render only
//! and then dropped.

use crate::clip::ClipAlgorithm;
use crate::color::Rgb;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::graphic::{Algorithm, Graphic, GraphicKind};
use crate::logging::TimingGuard;
use crate::output::PngEncoder;
use crate::render::Drawable;
use std::collections::BTreeMap;
use std::path::Path;

/// Id reserved for the one-shot temporary graphic.
pub const TEMP_ID: i64 = -1;

/// A framebuffer plus the graphics to paint into it.
#[derive(Debug, Clone)]
pub struct Canvas {
    framebuffer: Framebuffer,
    background: Rgb,
    pen: Rgb,
    graphics: BTreeMap<i64, Graphic>,
    temp: Option<Graphic>,
}

impl Canvas {
    /// Create an empty canvas with a black background and black pen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            framebuffer: Framebuffer::new(width, height)?,
            background: Rgb::BLACK,
            pen: Rgb::BLACK,
            graphics: BTreeMap::new(),
            temp: None,
        })
    }

    /// Create a canvas from the `canvas` and `pen` sections of a config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the configured size is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut canvas = Self::new(config.canvas.width, config.canvas.height)?;
        canvas.background = config.canvas.background;
        canvas.pen = config.pen.color;
        Ok(canvas)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Current pen color.
    #[must_use]
    pub const fn pen(&self) -> Rgb {
        self.pen
    }

    /// Set the pen color used by later graphics.
    pub fn set_pen(&mut self, color: Rgb) {
        self.pen = color;
    }

    /// Resize and drop every graphic, including a pending temporary one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero; the
    /// canvas is left unchanged.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        self.framebuffer = Framebuffer::new(width, height)?;
        self.graphics.clear();
        self.temp = None;
        log::debug!(target: "canvas", "reset to {width}x{height}");
        Ok(())
    }

    /// Store `graphic` under `id`, replacing any graphic already there.
    pub fn insert(&mut self, id: i64, graphic: Graphic) {
        if id == TEMP_ID {
            self.temp = Some(graphic);
        } else {
            self.graphics.insert(id, graphic);
        }
    }

    /// Build a graphic in the current pen color and store it under `id`.
    ///
    /// # Errors
    ///
    /// Returns the construction error if the algorithm or point count does
    /// not fit `kind`; nothing is stored in that case.
    pub fn add(&mut self, id: i64, kind: GraphicKind, algorithm: Algorithm, points: Vec<Point>) -> Result<()> {
        let graphic = Graphic::new(kind, algorithm, self.pen, points)?;
        self.insert(id, graphic);
        Ok(())
    }

    /// Graphic stored under `id`, if any.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Graphic> {
        if id == TEMP_ID {
            self.temp.as_ref()
        } else {
            self.graphics.get(&id)
        }
    }

    /// Number of stored graphics, excluding the temporary one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphics.len()
    }

    /// Whether no graphics are stored, excluding the temporary one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphics.is_empty()
    }

    /// Translate graphic `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraphic`] if there is no such graphic.
    pub fn translate(&mut self, id: i64, dx: i32, dy: i32) -> Result<()> {
        self.graphic_mut(id)?.translate(dx, dy);
        Ok(())
    }

    /// Rotate graphic `id` about `center`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraphic`] for a missing id and
    /// [`Error::UnsupportedOperation`] for ellipses.
    pub fn rotate(&mut self, id: i64, center: Point, degrees: f64) -> Result<()> {
        self.graphic_mut(id)?.rotate(center, degrees)
    }

    /// Scale graphic `id` about `center`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraphic`] if there is no such graphic.
    pub fn scale(&mut self, id: i64, center: Point, factor: f64) -> Result<()> {
        self.graphic_mut(id)?.scale(center, factor);
        Ok(())
    }

    /// Clip line `id` to the window spanned by `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGraphic`] for a missing id and
    /// [`Error::UnsupportedOperation`] if the graphic is not a line.
    pub fn clip(&mut self, id: i64, algorithm: ClipAlgorithm, a: Point, b: Point) -> Result<()> {
        self.graphic_mut(id)?.clip(algorithm, a, b)
    }

    fn graphic_mut(&mut self, id: i64) -> Result<&mut Graphic> {
        self.graphics.get_mut(&id).ok_or(Error::UnknownGraphic(id))
    }

    /// Repaint the framebuffer and return it.
    ///
    /// Clears to the background, paints stored graphics in ascending id
    /// order, then the temporary graphic, which is consumed.
    pub fn render(&mut self) -> &Framebuffer {
        let _timing = TimingGuard::new("canvas", "render");
        self.framebuffer.clear(self.background);
        for graphic in self.graphics.values() {
            graphic.draw_to(&mut self.framebuffer);
        }
        if let Some(temp) = self.temp.take() {
            temp.draw_to(&mut self.framebuffer);
        }
        &self.framebuffer
    }

    /// Framebuffer as of the last render.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Render and write the result as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoded.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        PngEncoder::write_to_file(self.render(), path)?;
        log::debug!(
            target: "canvas",
            "saved {} ({}x{})",
            path.display(),
            self.width(),
            self.height()
        );
        Ok(())
    }
}
