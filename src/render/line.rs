//! Line rasterization.
//!
//! Both algorithms normalize the segment into a single octant, step along
//! the major axis with increasing coordinate, and undo the normalization on
//! the emitted pixels.

use crate::geometry::{swap_xy, Point};

/// Signed distance `to - from`, widened so extreme coordinates cannot overflow.
fn span(from: i32, to: i32) -> i64 {
    i64::from(to) - i64::from(from)
}

/// Rasterize a segment with the Digital Differential Analyzer.
///
/// The minor coordinate is accumulated in floating point and truncated at
/// each emitted pixel.
#[must_use]
pub fn dda(start: Point, end: Point) -> Vec<Point> {
    if start == end {
        return vec![start];
    }

    // Sample along the axis of greater extent
    let steep = span(start.y, end.y).abs() > span(start.x, end.x).abs();
    let (a, b) = if steep {
        (Point::new(start.y, start.x), Point::new(end.y, end.x))
    } else {
        (start, end)
    };
    let (a, b) = if a.x <= b.x { (a, b) } else { (b, a) };

    let run = span(a.x, b.x);
    let gradient = span(a.y, b.y) as f64 / run as f64;
    let mut pixels = Vec::with_capacity(run as usize + 1);
    let mut y = f64::from(a.y);
    for x in a.x..=b.x {
        pixels.push(Point::new(x, y as i32));
        y += gradient;
    }

    if steep {
        swap_xy(&pixels)
    } else {
        pixels
    }
}

/// Rasterize a segment with Bresenham's integer decision variable.
///
/// # Algorithm
///
/// After normalization `0 <= dy <= dx`. The decider starts at `2dy - dx`;
/// each step advances x and advances y only while the decider is positive.
/// Normalized coordinates and the decider are `i64`, so any pair of `i32`
/// endpoints is safe.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
#[must_use]
pub fn bresenham(start: Point, end: Point) -> Vec<Point> {
    let steep = span(start.y, end.y).abs() > span(start.x, end.x).abs();
    let swap = |(x, y): (i64, i64)| if steep { (y, x) } else { (x, y) };
    let s = swap((i64::from(start.x), i64::from(start.y)));
    let e = swap((i64::from(end.x), i64::from(end.y)));

    // Flip so the slope is non-negative
    let flipped = (s.1 - e.1).signum() * (s.0 - e.0).signum() < 0;
    let flip = |(x, y): (i64, i64)| if flipped { (x, -y) } else { (x, y) };
    let (s, e) = (flip(s), flip(e));

    let (a, b) = if s.0 <= e.0 { (s, e) } else { (e, s) };
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;

    let mut local = Vec::with_capacity(dx.max(dy.abs()) as usize + 1);
    if dx == 0 {
        for y in a.1.min(b.1)..=a.1.max(b.1) {
            local.push((a.0, y));
        }
    } else if dy == 0 {
        for x in a.0..=b.0 {
            local.push((x, a.1));
        }
    } else {
        let mut y = a.1;
        let mut decider = 2 * dy - dx;
        for x in a.0..=b.0 {
            local.push((x, y));
            if decider > 0 {
                y += 1;
                decider += 2 * dy - 2 * dx;
            } else {
                decider += 2 * dy;
            }
        }
    }

    // Undo the flip, then the swap; results lie between the original endpoints
    local
        .into_iter()
        .map(|p| {
            let (x, y) = swap(flip(p));
            Point::new(x as i32, y as i32)
        })
        .collect()
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
