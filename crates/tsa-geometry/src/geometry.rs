//! Planar primitives: side-of-line classification, infinite line vs.
//! rectangle clipping, and Graham-scan convex hulls.
//!
//! Every function here is total. Degenerate input produces documented
//! fallback geometry instead of an error.

use std::cmp::Ordering;

use tsa_core::constants::{DEGENERATE_LENGTH_EPSILON, INTERSECTION_DEDUP_EPSILON};
use tsa_core::types::{LineSegment, Point2D, Rect};

/// Edge parameter slack when accepting an intersection on a rectangle edge.
const EDGE_PARAM_TOLERANCE: f64 = 1e-9;

/// Cross product `(b - a) × (p - a)`.
///
/// Positive when `p` is left of the directed line `a → b` (in a y-up
/// frame), negative when right, zero when collinear.
pub fn side_of_line(a: Point2D, b: Point2D, p: Point2D) -> f64 {
    (b - a).perp_dot(p - a)
}

/// Clip the infinite line through `a` and `b` against `rect`.
///
/// Edges are tested in [`Rect::edges`] order and the first two distinct
/// hits (closer than 1e-6 counts as the same point) are returned in that
/// order. When fewer than two hits are found (line misses the rectangle,
/// is parallel to an edge at float precision, or `a == b`) the input
/// segment is returned unchanged.
pub fn line_rect_intersection(a: Point2D, b: Point2D, rect: &Rect) -> LineSegment {
    let dir = b - a;
    if dir.length() <= DEGENERATE_LENGTH_EPSILON {
        log::debug!("line_rect_intersection: degenerate line {a} -> {b}, not extending");
        return LineSegment::new(a, b);
    }

    let mut hits: Vec<Point2D> = Vec::with_capacity(2);
    for edge in rect.edges() {
        let Some(hit) = line_edge_intersection(a, dir, &edge) else {
            continue;
        };
        let duplicate = hits
            .iter()
            .any(|h| (h.x - hit.x).abs() < INTERSECTION_DEDUP_EPSILON
                && (h.y - hit.y).abs() < INTERSECTION_DEDUP_EPSILON);
        if !duplicate {
            hits.push(hit);
            if hits.len() == 2 {
                return LineSegment::new(hits[0], hits[1]);
            }
        }
    }

    log::debug!(
        "line_rect_intersection: {} hit(s) for {a} -> {b}, falling back to segment",
        hits.len()
    );
    LineSegment::new(a, b)
}

/// Intersection of the infinite line `origin + t·dir` with a finite edge.
fn line_edge_intersection(origin: Point2D, dir: Point2D, edge: &LineSegment) -> Option<Point2D> {
    let e = edge.direction();
    let denom = dir.perp_dot(e);
    if denom.abs() <= DEGENERATE_LENGTH_EPSILON * dir.length() * e.length() {
        return None;
    }

    let w = edge.a - origin;
    let u = w.perp_dot(dir) / denom;
    if !(-EDGE_PARAM_TOLERANCE..=1.0 + EDGE_PARAM_TOLERANCE).contains(&u) {
        return None;
    }
    Some(edge.a + e * u.clamp(0.0, 1.0))
}

/// Convex hull by Graham scan.
///
/// The pivot is the point with the lowest y (ties: lowest x); the rest
/// are swept in polar-angle order around it. Only strict left turns are
/// kept, so collinear points on the hull boundary are dropped. Fewer than
/// three input points are returned unchanged.
pub fn convex_hull(points: &[Point2D]) -> Vec<Point2D> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let pivot_index = points
        .iter()
        .enumerate()
        .min_by(|(_, p), (_, q)| p.y.total_cmp(&q.y).then_with(|| p.x.total_cmp(&q.x)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let pivot = points[pivot_index];

    let mut rest: Vec<Point2D> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pivot_index)
        .map(|(_, p)| *p)
        .collect();
    rest.sort_by(|p, q| polar_order(pivot, *p, *q));

    let mut hull: Vec<Point2D> = Vec::with_capacity(points.len());
    hull.push(pivot);
    for p in rest {
        while hull.len() >= 2 && side_of_line(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// Order by polar angle around `pivot`, nearer points first on ties.
fn polar_order(pivot: Point2D, p: Point2D, q: Point2D) -> Ordering {
    let dp = p - pivot;
    let dq = q - pivot;
    dp.y
        .atan2(dp.x)
        .total_cmp(&dq.y.atan2(dq.x))
        .then_with(|| dp.length_squared().total_cmp(&dq.length_squared()))
}

/// Unsigned perpendicular distance from `p` to the infinite line `a → b`.
///
/// Falls back to the point distance from `a` for a degenerate line.
pub fn perpendicular_distance(a: Point2D, b: Point2D, p: Point2D) -> f64 {
    let len = (b - a).length();
    if len <= DEGENERATE_LENGTH_EPSILON {
        return (p - a).length();
    }
    side_of_line(a, b, p).abs() / len
}
