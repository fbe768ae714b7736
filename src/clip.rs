//! Line clipping against an axis-aligned window.
//!
//! Two interchangeable algorithms: Cohen-Sutherland region codes and
//! Liang-Barsky parametric bounds. Both report either the visible part of
//! the segment or that nothing is visible. Intersections are carried in
//! floating point; only the final endpoints are truncated toward zero onto
//! the pixel lattice, so the two algorithms agree to within one pixel.
//!
//! # References
//!
//! - Cohen, D., & Sutherland, I. (1967). Region-code line clipping.
//! - Liang, Y. D., & Barsky, B. A. (1984). "A new concept and method for line
//!   clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

use crate::error::{Error, Result};
use crate::geometry::{ClipRect, Point};
use crate::graphic::GraphicKind;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Region codes
// ============================================================================

/// x is left of the window.
pub const OUT_LEFT: u8 = 0b0001;
/// x is right of the window.
pub const OUT_RIGHT: u8 = 0b0010;
/// y is below the window.
pub const OUT_BOTTOM: u8 = 0b0100;
/// y is above the window.
pub const OUT_TOP: u8 = 0b1000;

/// Slack applied to region tests, absorbing rounding where a segment meets a
/// window corner exactly.
const EDGE_TOLERANCE: f64 = 1e-9;

/// Compute the Cohen-Sutherland outcode of `p` against `rect`.
///
/// ```text
///        |        |
///  1001  |  1000  | 1010
///        |        |
/// -------+--------+-------- top
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- bottom
///        |        |
///  0101  |  0100  | 0110
///        |        |
///      left     right
/// ```
#[inline]
#[must_use]
pub fn outcode(p: Point, rect: &ClipRect) -> u8 {
    region((f64::from(p.x), f64::from(p.y)), rect)
}

/// Outcode of a floating-point position.
fn region((x, y): (f64, f64), rect: &ClipRect) -> u8 {
    let mut code = 0;
    if x < f64::from(rect.left) - EDGE_TOLERANCE {
        code |= OUT_LEFT;
    } else if x > f64::from(rect.right) + EDGE_TOLERANCE {
        code |= OUT_RIGHT;
    }
    if y < f64::from(rect.bottom) - EDGE_TOLERANCE {
        code |= OUT_BOTTOM;
    } else if y > f64::from(rect.top) + EDGE_TOLERANCE {
        code |= OUT_TOP;
    }
    code
}

// ============================================================================
// Algorithms
// ============================================================================

/// Selects a clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    /// Cohen-Sutherland region-code clipping.
    CohenSutherland,
    /// Liang-Barsky parametric clipping.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Canonical tag used in commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }

    /// Clip the segment `start -> end` against `rect`.
    #[must_use]
    pub fn clip(self, start: Point, end: Point, rect: &ClipRect) -> Option<(Point, Point)> {
        match self {
            Self::CohenSutherland => cohen_sutherland(start, end, rect),
            Self::LiangBarsky => liang_barsky(start, end, rect),
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Cohen-Sutherland" => Ok(Self::CohenSutherland),
            "Liang-Barsky" => Ok(Self::LiangBarsky),
            _ => Err(Error::UnknownAlgorithm {
                kind: GraphicKind::Line,
                algorithm: s.to_string(),
            }),
        }
    }
}

/// Clip with Cohen-Sutherland region codes.
///
/// Each round replaces one endpoint at one violated boundary. Boundaries are
/// tried left, right, bottom, top, and for each boundary the start point
/// before the end point; the first violation found wins. Returns `None`
/// when both endpoints share an outside region.
#[must_use]
pub fn cohen_sutherland(start: Point, end: Point, rect: &ClipRect) -> Option<(Point, Point)> {
    let mut segment = Segment::new(start, end);
    for _ in 0..MAX_ROUNDS {
        match segment.round(rect) {
            Round::Accept => return Some(segment.snapped(rect)),
            Round::Reject => return None,
            Round::Clipped { boundary, endpoint } => {
                log::trace!(target: "clip", "{endpoint:?} moved onto boundary {boundary:#06b}");
            }
        }
    }
    None
}

/// Each endpoint meets each boundary at most once, plus the deciding round.
const MAX_ROUNDS: usize = 9;

/// Which endpoint a Cohen-Sutherland round moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Start,
    End,
}

/// Outcome of one Cohen-Sutherland round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    /// Both endpoints are inside.
    Accept,
    /// Both endpoints share an outside region.
    Reject,
    /// `endpoint` was moved onto the `boundary` edge (an `OUT_*` bit).
    Clipped { boundary: u8, endpoint: Endpoint },
}

/// A segment under Cohen-Sutherland clipping.
///
/// Endpoints stay on the original line and in floating point; outcodes are
/// taken from the exact intersections.
#[derive(Debug, Clone, Copy)]
struct Segment {
    origin: (f64, f64),
    delta: (f64, f64),
    start: (f64, f64),
    end: (f64, f64),
}

impl Segment {
    fn new(start: Point, end: Point) -> Self {
        let origin = (f64::from(start.x), f64::from(start.y));
        let end = (f64::from(end.x), f64::from(end.y));
        Self { origin, delta: (end.0 - origin.0, end.1 - origin.1), start: origin, end }
    }

    fn round(&mut self, rect: &ClipRect) -> Round {
        let code_start = region(self.start, rect);
        let code_end = region(self.end, rect);

        if code_start & code_end != 0 {
            return Round::Reject;
        }
        let violated = code_start | code_end;
        if violated == 0 {
            return Round::Accept;
        }

        // OUT_* bits ascend in priority order
        let boundary = 1u8 << violated.trailing_zeros();
        let hit = self.intersect(boundary, rect);
        let endpoint = if code_start & boundary != 0 {
            self.start = hit;
            Endpoint::Start
        } else {
            self.end = hit;
            Endpoint::End
        };
        Round::Clipped { boundary, endpoint }
    }

    /// Where the line crosses the `boundary` edge.
    ///
    /// Only called when exactly one endpoint lies beyond the edge, so the
    /// line is never parallel to it.
    fn intersect(&self, boundary: u8, rect: &ClipRect) -> (f64, f64) {
        let ((x0, y0), (dx, dy)) = (self.origin, self.delta);
        match boundary {
            OUT_LEFT | OUT_RIGHT => {
                let x = f64::from(if boundary == OUT_LEFT { rect.left } else { rect.right });
                (x, y0 + (x - x0) / dx * dy)
            }
            _ => {
                let y = f64::from(if boundary == OUT_BOTTOM { rect.bottom } else { rect.top });
                (x0 + (y - y0) / dy * dx, y)
            }
        }
    }

    /// Truncated endpoints, pulled inside the window first.
    fn snapped(&self, rect: &ClipRect) -> (Point, Point) {
        let snap = |(x, y): (f64, f64)| {
            Point::truncate(
                x.clamp(f64::from(rect.left), f64::from(rect.right)),
                y.clamp(f64::from(rect.bottom), f64::from(rect.top)),
            )
        };
        (snap(self.start), snap(self.end))
    }
}

/// Clip with Liang-Barsky parametric bounds.
///
/// The segment is `P(u) = start + u * (end - start)` for `u` in `[0, 1]`.
/// Each boundary contributes `p * u <= q`; a negative `p` bounds `u` from
/// below, a positive `p` from above, and `p == 0` means the segment runs
/// parallel to that boundary. Returns `None` when the bounds cross.
#[must_use]
pub fn liang_barsky(start: Point, end: Point, rect: &ClipRect) -> Option<(Point, Point)> {
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));
    let dx = f64::from(end.x) - x0;
    let dy = f64::from(end.y) - y0;

    let constraints = [
        (-dx, x0 - f64::from(rect.left)),
        (dx, f64::from(rect.right) - x0),
        (-dy, y0 - f64::from(rect.bottom)),
        (dy, f64::from(rect.top) - y0),
    ];

    let mut u_in = 0.0f64;
    let mut u_out = 1.0f64;
    for (p, q) in constraints {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let u = q / p;
        if p < 0.0 {
            u_in = u_in.max(u);
        } else {
            u_out = u_out.min(u);
        }
    }

    if u_in > u_out {
        return None;
    }

    let at = |u: f64| Point::truncate(x0 + u * dx, y0 + u * dy);
    Some((at(u_in), at(u_out)))
}
