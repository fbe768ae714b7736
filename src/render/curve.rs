//! Parametric curve rasterization.
//!
//! Curves are sampled by adaptive bisection of the parameter interval: a
//! span stops subdividing once its two end samples touch (Chebyshev distance
//! at most one pixel) or the span is narrower than [`MIN_SPAN`].
//!
//! # References
//!
//! - de Casteljau, P. (1959). Bézier evaluation by repeated interpolation.
//! - de Boor, C. (1972). "On calculating with B-splines." *J. Approx. Theory*, 6(1).

use crate::geometry::Point;

/// Narrowest parameter span that is still bisected.
pub const MIN_SPAN: f64 = 0.0001;

/// Order of the B-spline basis used by [`bspline`].
pub const BSPLINE_ORDER: usize = 3;

/// Keeps the last knot index inside the control polygon.
const BSPLINE_DOMAIN_EPSILON: f64 = 0.001;

/// A pending piece of the subdivision.
enum Frame {
    /// Bisect `[u_low, u_high]` whose ends evaluate to `low` and `high`.
    Span { u_low: f64, u_high: f64, low: Point, high: Point },
    /// Emit a midpoint once both of its halves are done.
    Emit(Point),
}

/// Sample `eval` over `[u_min, u_max]` by adaptive bisection.
///
/// Each midpoint is emitted after both of its halves, skipping midpoints
/// that coincide with a span end. The two curve endpoints are appended last.
/// Uses an explicit stack so depth is bounded by the span limit, not the
/// call stack.
pub fn subdivide<F>(u_min: f64, u_max: f64, eval: F) -> Vec<Point>
where
    F: Fn(f64) -> Point,
{
    let start = eval(u_min);
    let end = eval(u_max);

    let mut pixels = Vec::new();
    let mut stack = vec![Frame::Span { u_low: u_min, u_high: u_max, low: start, high: end }];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Emit(point) => pixels.push(point),
            Frame::Span { u_low, u_high, low, high } => {
                if low.is_adjacent(high) || (u_high - u_low).abs() <= MIN_SPAN {
                    continue;
                }
                let u = (u_low + u_high) / 2.0;
                let mid = eval(u);
                if mid != low && mid != high {
                    stack.push(Frame::Emit(mid));
                }
                stack.push(Frame::Span { u_low: u, u_high, low: mid, high });
                stack.push(Frame::Span { u_low, u_high: u, low, high: mid });
            }
        }
    }

    pixels.push(start);
    pixels.push(end);
    pixels
}

/// Rasterize a Bézier curve over its control points.
#[must_use]
pub fn bezier(controls: &[Point]) -> Vec<Point> {
    if controls.is_empty() {
        return Vec::new();
    }
    subdivide(0.0, 1.0, |u| de_casteljau(controls, u))
}

/// Evaluate a Bézier curve at `u` by repeated linear interpolation.
#[must_use]
pub fn de_casteljau(controls: &[Point], u: f64) -> Point {
    let mut work: Vec<(f64, f64)> =
        controls.iter().map(|p| (f64::from(p.x), f64::from(p.y))).collect();

    for len in (1..work.len()).rev() {
        for i in 0..len {
            let (x0, y0) = work[i];
            let (x1, y1) = work[i + 1];
            work[i] = ((1.0 - u) * x0 + u * x1, (1.0 - u) * y0 + u * y1);
        }
    }

    work.first().map_or(Point::ORIGIN, |&(x, y)| Point::truncate(x, y))
}

/// Rasterize a uniform cubic B-spline.
///
/// Needs more than [`BSPLINE_ORDER`] control points; fewer yields nothing.
#[must_use]
pub fn bspline(controls: &[Point]) -> Vec<Point> {
    if controls.len() <= BSPLINE_ORDER {
        return Vec::new();
    }
    let u_min = BSPLINE_ORDER as f64;
    let u_max = controls.len() as f64 - BSPLINE_DOMAIN_EPSILON;
    subdivide(u_min, u_max, |u| de_boor_cox(controls, u))
}

/// Evaluate the cubic B-spline at `u`, where `u` lies in `[3, n)`.
#[must_use]
pub fn de_boor_cox(controls: &[Point], u: f64) -> Point {
    let knot = u as usize;
    let (x, y) = blend(controls, knot, BSPLINE_ORDER, u);
    Point::truncate(x, y)
}

fn blend(controls: &[Point], i: usize, r: usize, u: f64) -> (f64, f64) {
    if r == 0 {
        let p = controls[i];
        return (f64::from(p.x), f64::from(p.y));
    }
    let weight = (u - i as f64) / (BSPLINE_ORDER + 1 - r) as f64;
    let (x1, y1) = blend(controls, i, r - 1, u);
    let (x2, y2) = blend(controls, i - 1, r - 1, u);
    (weight * x1 + (1.0 - weight) * x2, weight * y1 + (1.0 - weight) * y2)
}
