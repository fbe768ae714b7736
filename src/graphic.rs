//! Graphic primitives.
//!
//! A [`Graphic`] is a kind tag, an algorithm, a pen color and an owned list
//! of control points. Drawing dispatches on the kind; transforms rewrite the
//! control points in place. Capabilities that only some kinds have (`rotate`,
//! `clip`) are checked against the kind and reported as
//! [`Error::UnsupportedOperation`].

use crate::clip::ClipAlgorithm;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::{self, ClipRect, Point};
use crate::render::{curve, ellipse, line, polygon};
use std::fmt;
use std::str::FromStr;

/// The kinds of primitive a [`Graphic`] can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicKind {
    /// A straight segment between two endpoints.
    Line,
    /// A closed outline through three or more vertices.
    Polygon,
    /// An axis-aligned rectangle outline given by two opposite corners.
    Rectangle,
    /// An axis-aligned ellipse inscribed in a bounding box.
    Ellipse,
    /// A parametric curve over its control points.
    Curve,
}

impl GraphicKind {
    /// Lower-case name, as used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Curve => "curve",
        }
    }
}

impl fmt::Display for GraphicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Digital Differential Analyzer lines.
    Dda,
    /// Bresenham integer lines.
    Bresenham,
    /// Midpoint ellipse.
    Midpoint,
    /// Bézier curve by de Casteljau evaluation.
    Bezier,
    /// Cubic B-spline by de Boor-Cox evaluation.
    BSpline,
}

impl Algorithm {
    /// Canonical tag used in commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
            Self::Midpoint => "Midpoint",
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }

    /// Whether this algorithm can rasterize `kind`.
    #[must_use]
    pub const fn supports(self, kind: GraphicKind) -> bool {
        matches!(
            (kind, self),
            (
                GraphicKind::Line | GraphicKind::Polygon | GraphicKind::Rectangle,
                Self::Dda | Self::Bresenham
            ) | (GraphicKind::Ellipse, Self::Midpoint)
                | (GraphicKind::Curve, Self::Bezier | Self::BSpline)
        )
    }

    /// Parse an algorithm tag and check that it applies to `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] if the tag is unknown or names an
    /// algorithm for a different kind.
    pub fn parse_for(kind: GraphicKind, tag: &str) -> Result<Self> {
        let unknown = || Error::UnknownAlgorithm { kind, algorithm: tag.to_string() };
        let algorithm: Self = tag.parse().map_err(|_| unknown())?;
        if algorithm.supports(kind) {
            Ok(algorithm)
        } else {
            Err(unknown())
        }
    }

    fn line(self) -> fn(Point, Point) -> Vec<Point> {
        match self {
            Self::Dda => line::dda,
            _ => line::bresenham,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a tag without a kind; errors report it against [`GraphicKind::Line`].
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DDA" => Ok(Self::Dda),
            "Bresenham" => Ok(Self::Bresenham),
            "Midpoint" => Ok(Self::Midpoint),
            "Bezier" => Ok(Self::Bezier),
            "B-spline" | "BSpline" => Ok(Self::BSpline),
            _ => Err(Error::UnknownAlgorithm {
                kind: GraphicKind::Line,
                algorithm: s.to_string(),
            }),
        }
    }
}

/// How many control points a kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCount {
    /// Exactly this many.
    Exactly(usize),
    /// This many or more.
    AtLeast(usize),
}

impl PointCount {
    /// Whether `n` points satisfy this requirement.
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exactly(k) => n == k,
            Self::AtLeast(k) => n >= k,
        }
    }

    /// The requirement for `kind` drawn with `algorithm`.
    #[must_use]
    pub const fn required(kind: GraphicKind, algorithm: Algorithm) -> Self {
        match (kind, algorithm) {
            (GraphicKind::Line | GraphicKind::Rectangle | GraphicKind::Ellipse, _) => {
                Self::Exactly(2)
            }
            (GraphicKind::Polygon, _) => Self::AtLeast(3),
            (GraphicKind::Curve, Algorithm::BSpline) => Self::AtLeast(curve::BSPLINE_ORDER + 1),
            (GraphicKind::Curve, _) => Self::AtLeast(2),
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(k) => write!(f, "exactly {k}"),
            Self::AtLeast(k) => write!(f, "at least {k}"),
        }
    }
}

/// A rasterizable primitive that owns its control points.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    kind: GraphicKind,
    algorithm: Algorithm,
    color: Rgb,
    points: Vec<Point>,
    clipped_away: bool,
}

impl Graphic {
    /// Create a graphic after validating the algorithm and point count.
    ///
    /// A rectangle takes its two opposite corners and stores the four
    /// derived vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] if `algorithm` cannot draw `kind`
    /// and [`Error::InvalidPointCount`] if `points` does not fit the kind.
    pub fn new(kind: GraphicKind, algorithm: Algorithm, color: Rgb, points: Vec<Point>) -> Result<Self> {
        if !algorithm.supports(kind) {
            return Err(Error::UnknownAlgorithm { kind, algorithm: algorithm.to_string() });
        }
        let expected = PointCount::required(kind, algorithm);
        if !expected.accepts(points.len()) {
            return Err(Error::InvalidPointCount { kind, expected, actual: points.len() });
        }

        let points = match kind {
            GraphicKind::Rectangle => polygon::rectangle_corners(points[0], points[1]).to_vec(),
            _ => points,
        };

        log::debug!(target: "graphic", "new {kind} ({algorithm}) with {} points", points.len());
        Ok(Self { kind, algorithm, color, points, clipped_away: false })
    }

    /// A line segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for non-line algorithms.
    pub fn line(algorithm: Algorithm, color: Rgb, start: Point, end: Point) -> Result<Self> {
        Self::new(GraphicKind::Line, algorithm, color, vec![start, end])
    }

    /// A closed polygon outline.
    ///
    /// # Errors
    ///
    /// Returns an error for non-line algorithms or fewer than three vertices.
    pub fn polygon(algorithm: Algorithm, color: Rgb, vertices: Vec<Point>) -> Result<Self> {
        Self::new(GraphicKind::Polygon, algorithm, color, vertices)
    }

    /// A rectangle outline from two opposite corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for non-line algorithms.
    pub fn rectangle(algorithm: Algorithm, color: Rgb, a: Point, b: Point) -> Result<Self> {
        Self::new(GraphicKind::Rectangle, algorithm, color, vec![a, b])
    }

    /// A midpoint ellipse inscribed in the box spanned by two corners.
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible like the other constructors.
    pub fn ellipse(color: Rgb, a: Point, b: Point) -> Result<Self> {
        Self::new(GraphicKind::Ellipse, Algorithm::Midpoint, color, vec![a, b])
    }

    /// A Bézier or B-spline curve.
    ///
    /// # Errors
    ///
    /// Returns an error for non-curve algorithms or too few control points
    /// (two for Bézier, four for B-spline).
    pub fn curve(algorithm: Algorithm, color: Rgb, controls: Vec<Point>) -> Result<Self> {
        Self::new(GraphicKind::Curve, algorithm, color, controls)
    }

    /// Kind of primitive.
    #[must_use]
    pub const fn kind(&self) -> GraphicKind {
        self.kind
    }

    /// Rasterization algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Pen color of every pixel.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Current control points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether clipping has left nothing of this line.
    #[must_use]
    pub const fn is_clipped_away(&self) -> bool {
        self.clipped_away
    }

    /// Rasterize to pixels in generation order.
    ///
    /// Duplicates are possible and coordinates are not bounded to any canvas.
    #[must_use]
    pub fn draw(&self) -> Vec<Point> {
        match self.kind {
            GraphicKind::Line if self.clipped_away => Vec::new(),
            GraphicKind::Line => (self.algorithm.line())(self.points[0], self.points[1]),
            GraphicKind::Polygon | GraphicKind::Rectangle => {
                polygon::outline(&self.points, self.algorithm.line())
            }
            GraphicKind::Ellipse => ellipse::midpoint(self.points[0], self.points[1]),
            GraphicKind::Curve => match self.algorithm {
                Algorithm::BSpline => curve::bspline(&self.points),
                _ => curve::bezier(&self.points),
            },
        }
    }

    /// Rasterize to pixels paired with the pen color.
    pub fn pixels(&self) -> impl Iterator<Item = (Point, Rgb)> {
        let color = self.color;
        self.draw().into_iter().map(move |p| (p, color))
    }

    /// Move every control point by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.points = geometry::translate(&self.points, dx, dy);
        log::trace!(target: "graphic", "translate {} by ({dx}, {dy})", self.kind);
    }

    /// Rotate about `center` by `degrees`, clockwise on a y-down canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for ellipses, whose bounding
    /// box cannot express a rotated ellipse.
    pub fn rotate(&mut self, center: Point, degrees: f64) -> Result<()> {
        if self.kind == GraphicKind::Ellipse {
            return Err(Error::UnsupportedOperation { operation: "rotate", kind: self.kind });
        }
        self.about(center, |points| geometry::rotate(points, degrees));
        log::trace!(target: "graphic", "rotate {} about {center} by {degrees}", self.kind);
        Ok(())
    }

    /// Scale about `center` by `factor`.
    pub fn scale(&mut self, center: Point, factor: f64) {
        self.about(center, |points| geometry::scale(points, factor));
        log::trace!(target: "graphic", "scale {} about {center} by {factor}", self.kind);
    }

    /// Clip a line to the window spanned by corners `a` and `b`.
    ///
    /// A line with nothing left inside the window is marked clipped away;
    /// after that it draws nothing and further clips do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] for any kind but a line.
    pub fn clip(&mut self, algorithm: ClipAlgorithm, a: Point, b: Point) -> Result<()> {
        if self.kind != GraphicKind::Line {
            return Err(Error::UnsupportedOperation { operation: "clip", kind: self.kind });
        }
        if self.clipped_away {
            return Ok(());
        }

        let rect = ClipRect::from_corners(a, b);
        match algorithm.clip(self.points[0], self.points[1], &rect) {
            Some((start, end)) => {
                log::debug!(target: "clip", "{algorithm}: kept {start} -> {end}");
                self.points = vec![start, end];
            }
            None => {
                log::debug!(target: "clip", "{algorithm}: line rejected");
                self.clipped_away = true;
            }
        }
        Ok(())
    }

    /// Apply an origin-centered transform about `center`.
    ///
    /// Offsets from the center saturate at the `i32` range.
    fn about<F>(&mut self, center: Point, op: F)
    where
        F: FnOnce(&[Point]) -> Vec<Point>,
    {
        let local = geometry::translate(&self.points, center.x.saturating_neg(), center.y.saturating_neg());
        self.points = geometry::translate(&op(&local), center.x, center.y);
    }
}
