//! PNG writer for framebuffers: 8-bit RGB, no alpha.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes a [`Framebuffer`] as an 8-bit RGB PNG.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode `fb` into a new file at `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Io`] if the file cannot be created or written,
    /// [`crate::Error::PngEncoding`] if the encoder rejects the image.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let sink = BufWriter::new(File::create(path)?);
        Self::encode(fb, sink)
    }

    /// Encode `fb` in memory.
    ///
    /// # Errors
    ///
    /// [`crate::Error::PngEncoding`] if the encoder rejects the image.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(fb.pixels().len() / 4);
        Self::encode(fb, &mut encoded)?;
        Ok(encoded)
    }

    fn encode<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }
}
