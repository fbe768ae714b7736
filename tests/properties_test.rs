//! Property tests for the rasterizers, transforms and clippers.
//!
//! Run: cargo test --test properties_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use raster_kit::clip::{cohen_sutherland, liang_barsky};
use raster_kit::color::Rgb;
use raster_kit::geometry::{self, ClipRect, Point};
use raster_kit::graphic::{Algorithm, Graphic};
use raster_kit::render::{curve, ellipse, line};
use std::collections::HashSet;

fn point(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = Point> {
    (range.clone(), range).prop_map(|(x, y)| Point::new(x, y))
}

fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

fn endpoints_match(pixels: &[Point], a: Point, b: Point) -> bool {
    let (first, last) = (pixels[0], pixels[pixels.len() - 1]);
    (first == a && last == b) || (first == b && last == a)
}

fn near_rect(p: Point, rect: &ClipRect, slack: i32) -> bool {
    p.x >= rect.left - slack
        && p.x <= rect.right + slack
        && p.y >= rect.bottom - slack
        && p.y <= rect.top + slack
}

/// A direction for axis-aligned and diagonal segments.
fn octant_step() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        Just((1, 0)),
        Just((-1, 0)),
        Just((0, 1)),
        Just((0, -1)),
        Just((1, 1)),
        Just((1, -1)),
        Just((-1, 1)),
        Just((-1, -1)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ========================================================================
    // Lines
    // ========================================================================

    #[test]
    fn bresenham_hits_endpoints_and_is_connected(a in point(-500..=500), b in point(-500..=500)) {
        let pixels = line::bresenham(a, b);

        prop_assert_eq!(pixels.len() as i32, chebyshev(a, b) + 1);
        prop_assert!(endpoints_match(&pixels, a, b));
        prop_assert!(pixels.windows(2).all(|w| chebyshev(w[0], w[1]) == 1));
    }

    #[test]
    fn dda_count_and_connectivity(a in point(-500..=500), b in point(-500..=500)) {
        let pixels = line::dda(a, b);

        prop_assert_eq!(pixels.len() as i32, chebyshev(a, b) + 1);
        prop_assert!(pixels.windows(2).all(|w| chebyshev(w[0], w[1]) <= 1));
    }

    #[test]
    fn lines_along_octant_directions_are_exact(
        a in point(-200..=200),
        (sx, sy) in octant_step(),
        k in 0i32..=200,
    ) {
        let b = Point::new(a.x + sx * k, a.y + sy * k);

        for pixels in [line::dda(a, b), line::bresenham(a, b)] {
            prop_assert_eq!(pixels.len() as i32, k + 1);
            prop_assert!(endpoints_match(&pixels, a, b));
        }
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    #[test]
    fn rotate_round_trip_is_close(
        points in prop::collection::vec(point(-50..=50), 1..8),
        center in point(-20..=20),
        degrees in -180i32..=180,
    ) {
        let mut polygon = Graphic::polygon(Algorithm::Dda, Rgb::BLACK, pad(&points)).unwrap();
        let original = polygon.points().to_vec();

        polygon.rotate(center, f64::from(degrees)).unwrap();
        polygon.rotate(center, -f64::from(degrees)).unwrap();

        // Two truncations, the first rotated back: under 1 + sqrt(2) per axis.
        for (after, before) in polygon.points().iter().zip(&original) {
            prop_assert!(chebyshev(*after, *before) <= 2, "{} vs {}", after, before);
        }
    }

    #[test]
    fn scale_by_one_is_identity(points in prop::collection::vec(point(-1000..=1000), 1..16)) {
        prop_assert_eq!(geometry::scale(&points, 1.0), points);
    }

    #[test]
    fn translate_inverts(points in prop::collection::vec(point(-1000..=1000), 1..16), dx in -500i32..=500, dy in -500i32..=500) {
        let moved = geometry::translate(&points, dx, dy);
        prop_assert_eq!(geometry::translate(&moved, -dx, -dy), points);
    }

    // ========================================================================
    // Clipping
    // ========================================================================

    #[test]
    fn clipped_segments_stay_in_window(
        a in point(-100..=100),
        b in point(-100..=100),
        c1 in point(-60..=60),
        c2 in point(-60..=60),
    ) {
        let rect = ClipRect::from_corners(c1, c2);

        if let Some((s, e)) = cohen_sutherland(a, b, &rect) {
            prop_assert!(rect.contains(s) && rect.contains(e), "{} {} outside {:?}", s, e, rect);
        }
        if let Some((s, e)) = liang_barsky(a, b, &rect) {
            prop_assert!(near_rect(s, &rect, 1) && near_rect(e, &rect, 1), "{} {} outside {:?}", s, e, rect);
        }
    }

    #[test]
    fn clippers_agree_on_any_segment(
        a in point(-100..=100),
        b in point(-100..=100),
        c1 in point(-60..=60),
        c2 in point(-60..=60),
    ) {
        let rect = ClipRect::from_corners(c1, c2);

        match (cohen_sutherland(a, b, &rect), liang_barsky(a, b, &rect)) {
            (None, None) => {}
            (Some((s1, e1)), Some((s2, e2))) => {
                prop_assert!(chebyshev(s1, s2) <= 1 && chebyshev(e1, e2) <= 1, "{} {} vs {} {}", s1, e1, s2, e2);
            }
            (cs, lb) => prop_assert!(false, "disagree: {:?} vs {:?}", cs, lb),
        }
    }

    // ========================================================================
    // Ellipse and curves
    // ========================================================================

    #[test]
    fn ellipse_is_symmetric_about_center(a in point(-80..=80), b in point(-80..=80)) {
        let pixels = ellipse::midpoint(a, b);
        let center = Point::truncate(
            f64::from(a.x + b.x) / 2.0,
            f64::from(a.y + b.y) / 2.0,
        );
        let set: HashSet<Point> = pixels.iter().copied().collect();

        prop_assert_eq!(pixels.len() % 4, 0);
        for p in &pixels {
            prop_assert!(set.contains(&Point::new(2 * center.x - p.x, p.y)));
            prop_assert!(set.contains(&Point::new(p.x, 2 * center.y - p.y)));
        }
    }

    #[test]
    fn bezier_includes_control_endpoints(controls in prop::collection::vec(point(-200..=200), 2..6)) {
        let pixels = curve::bezier(&controls);
        let set: HashSet<Point> = pixels.iter().copied().collect();

        prop_assert!(set.contains(&controls[0]));
        prop_assert!(set.contains(&controls[controls.len() - 1]));
    }

    #[test]
    fn bspline_includes_evaluator_endpoints(controls in prop::collection::vec(point(-200..=200), 4..8)) {
        let pixels = curve::bspline(&controls);
        let n = controls.len() as f64;

        prop_assert!(pixels.contains(&curve::de_boor_cox(&controls, curve::BSPLINE_ORDER as f64)));
        prop_assert!(pixels.contains(&curve::de_boor_cox(&controls, n - 0.001)));
    }
}

/// Polygons need three vertices; repeat the last point as needed.
fn pad(points: &[Point]) -> Vec<Point> {
    let mut padded = points.to_vec();
    while padded.len() < 3 {
        padded.push(padded[padded.len() - 1]);
    }
    padded
}
