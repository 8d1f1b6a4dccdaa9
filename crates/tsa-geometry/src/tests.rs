//! Cross-module geometry scenarios and seeded randomized property checks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use test_log::test;

use tsa_core::types::{LineSegment, Point2D, Rect};

use crate::geometry::{convex_hull, line_rect_intersection, perpendicular_distance, side_of_line};
use crate::shading::ShadedRegionBuilder;
use crate::transform::CoordinateTransform;
use crate::vectors::{bearing_from, wrap_bearing_delta};

fn random_point(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> Point2D {
    Point2D::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi))
}

/// Point-in-convex-polygon for either winding, with tolerance.
fn inside_convex(polygon: &[Point2D], p: Point2D, eps: f64) -> bool {
    let n = polygon.len();
    let mut sign = 0.0;
    for i in 0..n {
        let s = side_of_line(polygon[i], polygon[(i + 1) % n], p);
        let len = (polygon[(i + 1) % n] - polygon[i]).length();
        if s.abs() <= eps * len {
            continue;
        }
        if sign == 0.0 {
            sign = s.signum();
        } else if s.signum() != sign {
            return false;
        }
    }
    true
}

// ---- GeometryUtils properties ----

#[test]
fn test_side_of_line_flips_across_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let a = random_point(&mut rng, -100.0, 100.0);
        let b = random_point(&mut rng, -100.0, 100.0);
        if (b - a).length() < 1e-3 {
            continue;
        }
        let normal = (b - a).perp().normalize();
        let t: f64 = rng.gen_range(-2.0..2.0);
        let d: f64 = rng.gen_range(0.01..50.0);
        let on_line = a + (b - a) * t;

        let left = side_of_line(a, b, on_line + normal * d);
        let right = side_of_line(a, b, on_line - normal * d);
        assert!(left > 0.0 && right < 0.0);

        let collinear = side_of_line(a, b, on_line);
        assert!(collinear.abs() < 1e-9 * (b - a).length_squared().max(1.0) * 4.0);
    }
}

#[test]
fn test_line_rect_returns_two_boundary_points() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let rect = Rect::from_size(800.0, 600.0);
    let mut checked = 0;
    while checked < 500 {
        // A line through an interior point is guaranteed to cross the rectangle.
        let inside = Point2D::new(rng.gen_range(1.0..799.0), rng.gen_range(1.0..599.0));
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let dir = Point2D::new(angle.cos(), angle.sin());
        let back: f64 = rng.gen_range(1.0..50.0);
        let ahead: f64 = rng.gen_range(1.0..50.0);
        let a = inside - dir * back;
        let b = inside + dir * ahead;

        let seg = line_rect_intersection(a, b, &rect);
        assert_ne!(seg, LineSegment::new(a, b), "fell back for a crossing line");
        assert!(seg.length() > 1e-6);
        for p in [seg.a, seg.b] {
            assert!(rect.distance_to_boundary(p) <= 1e-6, "{p} is off the boundary");
            assert!(perpendicular_distance(a, b, p) < 1e-6);
        }
        checked += 1;
    }
}

#[test]
fn test_convex_hull_contains_every_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..200 {
        let n: usize = rng.gen_range(3..40);
        let points: Vec<Point2D> = (0..n).map(|_| random_point(&mut rng, -50.0, 50.0)).collect();
        let hull = convex_hull(&points);
        assert!(hull.len() >= 3);

        // Strictly convex: every consecutive triple turns the same way.
        for i in 0..hull.len() {
            let turn = side_of_line(hull[i], hull[(i + 1) % hull.len()], hull[(i + 2) % hull.len()]);
            assert!(turn > 0.0, "hull has a non-left turn at {i}");
        }
        for p in &points {
            assert!(inside_convex(&hull, *p, 1e-9), "{p} outside hull");
        }
    }
}

// ---- Bearing properties ----

#[test]
fn test_bearing_recovers_angle() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..1000 {
        let b: f64 = rng.gen_range(0.0..360.0);
        let (sin, cos) = b.to_radians().sin_cos();
        let back = bearing_from(sin, cos);
        assert!((0.0..360.0).contains(&back));
        assert!(wrap_bearing_delta(back - b).abs() < 1e-9);
    }
}

// ---- Reference scenarios ----

#[test]
fn test_scenario_origin_to_center() {
    let t = CoordinateTransform::new(Rect::from_origin_size(-10.0, -10.0, 20.0, 20.0), 800.0, 600.0, true)
        .unwrap();
    let s = t.to_screen(Point2D::ZERO);
    assert!((s.x - 400.0).abs() <= 1.0);
    assert!((s.y - 300.0).abs() <= 1.0);
}

#[test]
fn test_scenario_side_preserved_by_extension() {
    let a = Point2D::new(80.0, 480.0);
    let b = Point2D::new(720.0, 80.0);
    let viewport = Rect::from_size(800.0, 600.0);

    for ship in [
        Point2D::new(720.0, 80.0),
        Point2D::new(600.0, 400.0),
        Point2D::new(100.0, 100.0),
    ] {
        let before = side_of_line(a, b, ship) > 0.0;
        let region = ShadedRegionBuilder::default().build(LineSegment::new(a, b), &viewport, ship, &[]);
        let after = side_of_line(region.extended.a, region.extended.b, ship) > 0.0;
        assert_eq!(before, after, "ship {ship} changed sides");
        assert_eq!(region.shade_positive, !before);
    }
}

// ---- ShadedRegionBuilder clearance property ----

#[test]
fn test_hatch_keeps_clear_of_bearing_line() {
    let mut rng = ChaCha8Rng::seed_from_u64(47);
    for _ in 0..300 {
        let w: f64 = rng.gen_range(50.0..1600.0);
        let h: f64 = rng.gen_range(50.0..1200.0);
        let viewport = Rect::from_size(w, h);
        let a = Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
        let b = Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
        if (b - a).length() < 1.0 {
            continue;
        }
        let ship = Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
        let margin: f64 = rng.gen_range(0.0..20.0);
        let count: usize = rng.gen_range(0..6);
        let endpoints: Vec<Point2D> = (0..count)
            .map(|_| Point2D::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
            .collect();

        let region = ShadedRegionBuilder::new(margin).build(LineSegment::new(a, b), &viewport, ship, &endpoints);
        let (p1, p2) = (region.extended.a, region.extended.b);

        assert!(region.gap >= margin);
        let nearest = endpoints
            .iter()
            .map(|e| perpendicular_distance(p1, p2, *e))
            .fold(f64::INFINITY, f64::min);
        if nearest.is_finite() {
            assert!((region.gap - nearest.max(margin)).abs() < 1e-9);
        }

        // Every hatch vertex sits on the shade side, at least `gap` from the line.
        for v in &region.polygon {
            let s = side_of_line(p1, p2, *v);
            let d = perpendicular_distance(p1, p2, *v);
            assert!(d >= region.gap - 1e-6, "vertex {v} only {d} from line, gap {}", region.gap);
            assert_eq!(s > 0.0, region.shade_positive);
        }
    }
}
