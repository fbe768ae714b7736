//! Line-oriented drawing command language.
//!
//! One command per line, words separated by whitespace. Blank lines and
//! lines starting with `#` are ignored.
//!
//! # Syntax
//!
//! ```text
//! resetCanvas <width> <height>
//! saveCanvas <name>
//! setColor <r> <g> <b>
//! drawLine <id> <x0> <y0> <x1> <y1> <DDA|Bresenham>
//! drawPolygon <id> <x> <y> <x> <y> <x> <y> ... <DDA|Bresenham>
//! drawRectangle <id> <x0> <y0> <x1> <y1> <DDA|Bresenham>
//! drawEllipse <id> <x0> <y0> <x1> <y1>
//! drawCurve <id> <x> <y> <x> <y> ... <Bezier|B-spline>
//! translate <id> <dx> <dy>
//! rotate <id> <cx> <cy> <degrees>
//! scale <id> <cx> <cy> <factor>
//! clip <id> <x0> <y0> <x1> <y1> <Cohen-Sutherland|Liang-Barsky>
//! ```
//!
//! # Example
//!
//! ```rust
//! use raster_kit::command::{parse_command, Command};
//!
//! let cmd = parse_command("translate 3 10 -4").unwrap();
//! assert!(matches!(cmd, Some(Command::Translate { id: 3, dx: 10, dy: -4 })));
//! assert!(parse_command("# comment").unwrap().is_none());
//! ```

mod interpreter;

pub use interpreter::Interpreter;

use crate::clip::ClipAlgorithm;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graphic::{Algorithm, GraphicKind};
use std::str::FromStr;

/// A parsed drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resize the canvas and drop every graphic.
    ResetCanvas {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Render and save the canvas under `<name>.<extension>`.
    SaveCanvas {
        /// File stem.
        name: String,
    },
    /// Change the pen color for later graphics.
    SetColor(Rgb),
    /// Create or replace graphic `id`.
    Draw {
        /// Graphic id; `-1` is the one-shot temporary graphic.
        id: i64,
        /// Kind of primitive.
        kind: GraphicKind,
        /// Rasterization algorithm.
        algorithm: Algorithm,
        /// Control points as written.
        points: Vec<Point>,
    },
    /// Translate graphic `id`.
    Translate {
        /// Graphic id.
        id: i64,
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotate graphic `id` about a center.
    Rotate {
        /// Graphic id.
        id: i64,
        /// Rotation center.
        center: Point,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale graphic `id` about a center.
    Scale {
        /// Graphic id.
        id: i64,
        /// Scaling center.
        center: Point,
        /// Scale factor.
        factor: f64,
    },
    /// Clip line `id` to a window.
    Clip {
        /// Graphic id.
        id: i64,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
        /// One window corner.
        a: Point,
        /// The opposite corner.
        b: Point,
    },
}

/// Parse one line of the command language.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns [`Error::Command`] for unknown commands, missing or malformed
/// arguments and trailing words, and [`Error::UnknownAlgorithm`] for an
/// algorithm tag that does not fit the primitive.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = Words::new(line);
    let name = words.word("command")?;

    let command = match name {
        "resetCanvas" => Command::ResetCanvas {
            width: words.parse("width")?,
            height: words.parse("height")?,
        },
        "saveCanvas" => Command::SaveCanvas { name: words.word("name")?.to_string() },
        "setColor" => Command::SetColor(Rgb::new(
            words.parse("red")?,
            words.parse("green")?,
            words.parse("blue")?,
        )),
        "drawLine" => words.draw_fixed(GraphicKind::Line)?,
        "drawRectangle" => words.draw_fixed(GraphicKind::Rectangle)?,
        "drawEllipse" => Command::Draw {
            id: words.parse("id")?,
            kind: GraphicKind::Ellipse,
            algorithm: Algorithm::Midpoint,
            points: vec![words.point()?, words.point()?],
        },
        "drawPolygon" => words.draw_list(GraphicKind::Polygon)?,
        "drawCurve" => words.draw_list(GraphicKind::Curve)?,
        "translate" => Command::Translate {
            id: words.parse("id")?,
            dx: words.parse("dx")?,
            dy: words.parse("dy")?,
        },
        "rotate" => Command::Rotate {
            id: words.parse("id")?,
            center: words.point()?,
            degrees: words.parse("angle")?,
        },
        "scale" => Command::Scale {
            id: words.parse("id")?,
            center: words.point()?,
            factor: words.parse("factor")?,
        },
        "clip" => {
            let id = words.parse("id")?;
            let a = words.point()?;
            let b = words.point()?;
            let algorithm = words.word("algorithm")?.parse::<ClipAlgorithm>()?;
            Command::Clip { id, algorithm, a, b }
        }
        other => return Err(Error::command(format!("unknown command '{other}'"))),
    };

    words.finish()?;
    log::trace!(target: "command", "parsed {name}");
    Ok(Some(command))
}

/// Cursor over the words of one command line.
struct Words<'a> {
    words: Vec<&'a str>,
    pos: usize,
}

impl<'a> Words<'a> {
    fn new(line: &'a str) -> Self {
        Self { words: line.split_whitespace().collect(), pos: 0 }
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        let word = self
            .words
            .get(self.pos)
            .copied()
            .ok_or_else(|| Error::command(format!("missing {what}")))?;
        self.pos += 1;
        Ok(word)
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let word = self.word(what)?;
        word.parse()
            .map_err(|_| Error::command(format!("invalid {what} '{word}'")))
    }

    fn point(&mut self) -> Result<Point> {
        Ok(Point::new(self.parse("x")?, self.parse("y")?))
    }

    /// `<id> <x0> <y0> <x1> <y1> <algorithm>`
    fn draw_fixed(&mut self, kind: GraphicKind) -> Result<Command> {
        let id = self.parse("id")?;
        let points = vec![self.point()?, self.point()?];
        let algorithm = Algorithm::parse_for(kind, self.word("algorithm")?)?;
        Ok(Command::Draw { id, kind, algorithm, points })
    }

    /// `<id> <x> <y> ... <algorithm>`; coordinates are read in pairs until
    /// the first pair that is not two integers.
    fn draw_list(&mut self, kind: GraphicKind) -> Result<Command> {
        let id = self.parse("id")?;
        let mut points = Vec::new();
        while let Some(point) = self.try_point() {
            points.push(point);
        }
        let algorithm = Algorithm::parse_for(kind, self.word("algorithm")?)?;
        Ok(Command::Draw { id, kind, algorithm, points })
    }

    fn try_point(&mut self) -> Option<Point> {
        let x = self.words.get(self.pos)?.parse().ok()?;
        let y = self.words.get(self.pos + 1)?.parse().ok()?;
        self.pos += 2;
        Some(Point::new(x, y))
    }

    fn finish(&self) -> Result<()> {
        match self.words.get(self.pos) {
            Some(extra) => Err(Error::command(format!("unexpected trailing word '{extra}'"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(line: &str) -> (i64, GraphicKind, Algorithm, Vec<Point>) {
        match parse_command(line).unwrap() {
            Some(Command::Draw { id, kind, algorithm, points }) => (id, kind, algorithm, points),
            other => panic!("expected draw command, got {other:?}"),
        }
    }

    #[test]
    fn test_skip_blank_and_comment() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \t").unwrap(), None);
        assert_eq!(parse_command("# drawLine 1 0 0 1 1 DDA").unwrap(), None);
        assert_eq!(parse_command("#no space").unwrap(), None);
    }

    #[test]
    fn test_parse_canvas_commands() {
        assert_eq!(
            parse_command("resetCanvas 640 480").unwrap(),
            Some(Command::ResetCanvas { width: 640, height: 480 })
        );
        assert_eq!(
            parse_command("saveCanvas 1").unwrap(),
            Some(Command::SaveCanvas { name: "1".into() })
        );
        assert_eq!(
            parse_command("  setColor 255 0 128  ").unwrap(),
            Some(Command::SetColor(Rgb::new(255, 0, 128)))
        );
    }

    #[test]
    fn test_parse_draw_line() {
        let (id, kind, algorithm, points) = draw("drawLine 1 0 0 100 -50 Bresenham");
        assert_eq!(id, 1);
        assert_eq!(kind, GraphicKind::Line);
        assert_eq!(algorithm, Algorithm::Bresenham);
        assert_eq!(points, vec![Point::new(0, 0), Point::new(100, -50)]);
    }

    #[test]
    fn test_parse_draw_ellipse_has_no_algorithm() {
        let (id, kind, algorithm, points) = draw("drawEllipse -1 10 10 50 30");
        assert_eq!(id, -1);
        assert_eq!(kind, GraphicKind::Ellipse);
        assert_eq!(algorithm, Algorithm::Midpoint);
        assert_eq!(points.len(), 2);

        assert!(parse_command("drawEllipse 1 10 10 50 30 Midpoint").is_err());
    }

    #[test]
    fn test_parse_point_lists() {
        let (_, kind, algorithm, points) = draw("drawPolygon 4 0 0 10 0 10 10 0 10 DDA");
        assert_eq!(kind, GraphicKind::Polygon);
        assert_eq!(algorithm, Algorithm::Dda);
        assert_eq!(points.len(), 4);

        let (_, kind, algorithm, points) = draw("drawCurve 5 0 0 10 20 30 -5 40 0 B-spline");
        assert_eq!(kind, GraphicKind::Curve);
        assert_eq!(algorithm, Algorithm::BSpline);
        assert_eq!(points[2], Point::new(30, -5));
    }

    #[test]
    fn test_parse_transforms() {
        assert_eq!(
            parse_command("rotate 2 50 60 -30").unwrap(),
            Some(Command::Rotate { id: 2, center: Point::new(50, 60), degrees: -30.0 })
        );
        assert_eq!(
            parse_command("scale 2 0 0 0.5").unwrap(),
            Some(Command::Scale { id: 2, center: Point::ORIGIN, factor: 0.5 })
        );
        assert_eq!(
            parse_command("clip 1 0 0 50 50 Liang-Barsky").unwrap(),
            Some(Command::Clip {
                id: 1,
                algorithm: ClipAlgorithm::LiangBarsky,
                a: Point::ORIGIN,
                b: Point::new(50, 50),
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("drawTriangle 1 0 0").unwrap_err();
        assert!(err.to_string().contains("unknown command 'drawTriangle'"));
    }

    #[test]
    fn test_malformed_arguments() {
        assert!(matches!(parse_command("resetCanvas 100"), Err(Error::Command { .. })));
        assert!(matches!(parse_command("setColor 256 0 0"), Err(Error::Command { .. })));
        assert!(matches!(parse_command("translate x 1 1"), Err(Error::Command { .. })));
        assert!(matches!(parse_command("translate 1 1 1 1"), Err(Error::Command { .. })));
        assert!(matches!(parse_command("drawLine 1 0 0 1 1"), Err(Error::Command { .. })));
    }

    #[test]
    fn test_algorithm_must_fit_kind() {
        assert!(matches!(
            parse_command("drawLine 1 0 0 1 1 Bezier"),
            Err(Error::UnknownAlgorithm { kind: GraphicKind::Line, .. })
        ));
        assert!(matches!(
            parse_command("drawCurve 1 0 0 1 1 DDA"),
            Err(Error::UnknownAlgorithm { kind: GraphicKind::Curve, .. })
        ));
        assert!(matches!(
            parse_command("clip 1 0 0 1 1 Sutherland-Hodgman"),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn test_dangling_coordinate_is_algorithm_error() {
        // An odd coordinate count leaves a number where the tag belongs.
        assert!(matches!(
            parse_command("drawPolygon 1 0 0 10 0 10 DDA"),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }
}
