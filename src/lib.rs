//! # raster-kit
//!
//! Integer-pixel rasterization of 2D primitives with a scriptable canvas.
//!
//! raster-kit turns lines, polygons, rectangles, ellipses and curves into
//! lists of pixel coordinates, transforms and clips them, and paints them
//! into an RGB framebuffer that can be saved as PNG.
//!
//! ## Features
//!
//! - **Lines**: DDA and Bresenham, all octants
//! - **Ellipses**: midpoint algorithm with four-way symmetry
//! - **Curves**: Bézier (de Casteljau) and cubic B-spline (de Boor-Cox),
//!   adaptively subdivided so that neighbouring pixels touch
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky for lines
//! - **Transforms**: translate, rotate and scale about a center
//! - **Scripting**: a line-oriented command language driving a [`canvas::Canvas`]
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_kit::prelude::*;
//!
//! let mut canvas = Canvas::new(100, 100)?;
//! canvas.set_pen(Rgb::WHITE);
//! canvas.add(1, GraphicKind::Line, Algorithm::Bresenham, vec![Point::new(0, 0), Point::new(99, 40)])?;
//! canvas.add(2, GraphicKind::Ellipse, Algorithm::Midpoint, vec![Point::new(20, 20), Point::new(80, 60)])?;
//!
//! let fb = canvas.render();
//! assert_eq!(fb.get_pixel(0, 0), Some(Rgb::WHITE));
//! # Ok::<(), raster_kit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `raster-kit` script runner binary

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel math truncates floats to integer coordinates throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGB pen colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Integer points, point-list transforms and clip windows.
pub mod geometry;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Graphic primitives and algorithm selection.
pub mod graphic;

/// Rasterization algorithms.
pub mod render;

/// Line clipping.
pub mod clip;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Canvas and Scripting
// ============================================================================

/// Drawing surface with id-ordered graphics.
pub mod canvas;

/// Drawing command language and interpreter.
pub mod command;

/// YAML configuration.
pub mod config;

/// Stderr logger for the `log` facade.
pub mod logging;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-kit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_kit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::clip::ClipAlgorithm;
    pub use crate::color::Rgb;
    pub use crate::command::{parse_command, Command, Interpreter};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipRect, Point};
    pub use crate::graphic::{Algorithm, Graphic, GraphicKind};
    pub use crate::output::PngEncoder;
    pub use crate::render::Drawable;
}
