//! Midpoint ellipse rasterization.
//!
//! One quadrant is generated around the origin in two regions split where
//! the slope magnitude crosses 1, then mirrored across both axes and moved
//! to the ellipse center.

use crate::geometry::{flip_x, flip_y, translate, Point};

/// Rasterize the axis-aligned ellipse inscribed in the box spanned by two
/// opposite corners.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Vec<Point> {
    let (ax, ay, bx, by) = (f64::from(a.x), f64::from(a.y), f64::from(b.x), f64::from(b.y));
    let center = Point::truncate((ax + bx) / 2.0, (ay + by) / 2.0);
    let rx = (ax - bx).abs() / 2.0;
    let ry = (ay - by).abs() / 2.0;

    let mut quarter = quadrant(rx, ry);
    quarter.extend(flip_x(&quarter));
    quarter.extend(flip_y(&quarter));
    translate(&quarter, center.x, center.y)
}

/// The quadrant with `x >= 0, y >= 0`, starting at `(0, ry)`.
fn quadrant(rx: f64, ry: f64) -> Vec<Point> {
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let mut pixels = Vec::new();

    // Region 1: slope magnitude below 1, x is the driving axis
    let mut x = 0i32;
    let mut y = ry as i32;
    let mut decider = ry2 - rx2 * ry + rx2 / 4.0;
    while ry2 * f64::from(x) < rx2 * f64::from(y) {
        pixels.push(Point::new(x, y));
        let step_y = decider >= 0.0;
        x += 1;
        if step_y {
            y -= 1;
        }
        decider += 2.0 * ry2 * f64::from(x) + ry2;
        if step_y {
            decider -= 2.0 * rx2 * f64::from(y);
        }
    }

    // Region 2: y is the driving axis
    let (fx, fy) = (f64::from(x), f64::from(y));
    let mut decider = ry2 * (fx + 0.5).powi(2) + rx2 * (fy - 1.0).powi(2) - rx2 * ry2;
    while y >= 0 {
        pixels.push(Point::new(x, y));
        let step_x = decider <= 0.0;
        y -= 1;
        if step_x {
            x += 1;
        }
        decider += rx2 - 2.0 * rx2 * f64::from(y);
        if step_x {
            decider += 2.0 * ry2 * f64::from(x);
        }
    }

    pixels
}
