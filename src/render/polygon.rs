//! Polygon outlines.

use crate::geometry::Point;

/// Rasterize a closed outline by drawing every edge with `line`.
///
/// Edges run from the last vertex back to the first, then pairwise through
/// the list, so the output starts with the closing edge.
#[must_use]
pub fn outline<F>(vertices: &[Point], line: F) -> Vec<Point>
where
    F: Fn(Point, Point) -> Vec<Point>,
{
    let Some(&last) = vertices.last() else {
        return Vec::new();
    };

    let mut pixels = Vec::new();
    let mut previous = last;
    for &vertex in vertices {
        pixels.extend(line(previous, vertex));
        previous = vertex;
    }
    pixels
}

/// The four corners of the rectangle spanned by two opposite corners, in
/// drawing order `a, (a.x, b.y), b, (b.x, a.y)`.
#[must_use]
pub fn rectangle_corners(a: Point, b: Point) -> [Point; 4] {
    [a, Point::new(a.x, b.y), b, Point::new(b.x, a.y)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::line::bresenham;
    use std::collections::HashSet;

    #[test]
    fn test_rectangle_corners_order() {
        let corners = rectangle_corners(Point::new(0, 0), Point::new(3, 5));
        assert_eq!(
            corners,
            [Point::new(0, 0), Point::new(0, 5), Point::new(3, 5), Point::new(3, 0)]
        );
    }

    #[test]
    fn test_rectangle_outline_is_hollow() {
        let corners = rectangle_corners(Point::new(0, 0), Point::new(3, 3));
        let pixels: HashSet<Point> = outline(&corners, bresenham).into_iter().collect();

        // 4x4 boundary has 12 distinct pixels
        assert_eq!(pixels.len(), 12);
        assert!(!pixels.contains(&Point::new(1, 1)));
        assert!(!pixels.contains(&Point::new(2, 2)));
        assert!(pixels.contains(&Point::new(3, 0)));
    }

    #[test]
    fn test_outline_closes_loop() {
        let triangle = [Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)];
        let pixels = outline(&triangle, bresenham);
        // the closing edge (0,4) -> (0,0) is drawn first
        assert!(pixels[..5].contains(&Point::new(0, 2)));
        assert!(pixels.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_outline_empty() {
        assert!(outline(&[], bresenham).is_empty());
    }
}
