//! Integer lattice geometry.
//!
//! Points live on the pixel grid. Every transform here is a pure function
//! over a point list that returns a fresh list; floating-point results are
//! truncated toward zero, never rounded.

use std::fmt;

/// A point on the integer pixel lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from floating-point coordinates, truncating toward zero.
    #[must_use]
    pub fn truncate(x: f64, y: f64) -> Self {
        Self::new(x as i32, y as i32)
    }

    /// Whether `other` is within one pixel on both axes (Chebyshev distance <= 1).
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Swap x and y of every point: `(x, y) -> (y, x)`.
#[must_use]
pub fn swap_xy(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.y, p.x)).collect()
}

/// Negate y of every point: `(x, y) -> (x, -y)`.
///
/// `i32::MIN` saturates to `i32::MAX`.
#[must_use]
pub fn flip_y(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x, p.y.saturating_neg())).collect()
}

/// Negate x of every point: `(x, y) -> (-x, y)`.
#[must_use]
pub fn flip_x(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x.saturating_neg(), p.y)).collect()
}

/// Add `(dx, dy)` to every point, saturating at the `i32` range.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x.saturating_add(dx), p.y.saturating_add(dy)))
        .collect()
}

/// Rotate every point about the origin by `degrees`.
///
/// With y pointing down the screen a positive angle turns clockwise.
#[must_use]
pub fn rotate(points: &[Point], degrees: f64) -> Vec<Point> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let (x, y) = (f64::from(p.x), f64::from(p.y));
            Point::truncate(x * cos - y * sin, x * sin + y * cos)
        })
        .collect()
}

/// Scale every point about the origin by `factor`.
#[must_use]
pub fn scale(points: &[Point], factor: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::truncate(f64::from(p.x) * factor, f64::from(p.y) * factor))
        .collect()
}

/// An axis-aligned clip window with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    /// Smallest x inside the window.
    pub left: i32,
    /// Largest x inside the window.
    pub right: i32,
    /// Smallest y inside the window.
    pub bottom: i32,
    /// Largest y inside the window.
    pub top: i32,
}

impl ClipRect {
    /// Build the window spanned by two arbitrary opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            bottom: a.y.min(b.y),
            top: a.y.max(b.y),
        }
    }

    /// Check if a point is inside the window (bounds included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.bottom..=self.top).contains(&point.y)
    }
}
