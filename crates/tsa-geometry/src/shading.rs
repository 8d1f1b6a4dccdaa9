//! Inactive-coverage shading: the hatched half-plane on the far side of
//! the bearing line from own ship.
//!
//! The bearing line is extended across the viewport, pushed away from
//! itself by a clearance gap toward the shade side, and closed against
//! the viewport corners beyond it. The gap is at least the safety margin
//! and grows to the nearest tracked vector endpoint, so the hatch never
//! crowds the beam or the vectors drawn over it.

use tsa_core::constants::{DEFAULT_SAFETY_MARGIN_PX, DEGENERATE_LENGTH_EPSILON};
use tsa_core::types::{LineSegment, Point2D, Rect};

use crate::geometry::{convex_hull, line_rect_intersection, perpendicular_distance, side_of_line};

/// Output of [`ShadedRegionBuilder::build`], all in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadedRegion {
    /// Hull-ordered polygon to fill. Empty for a degenerate bearing line.
    pub polygon: Vec<Point2D>,
    /// Bearing line extended to the viewport, oriented like the input line.
    pub extended: LineSegment,
    /// The extended line shifted by `gap` toward the shade side.
    pub offset_edge: LineSegment,
    /// Clearance between the bearing line and the hatch (pixels).
    pub gap: f64,
    /// Whether the shaded side is the positive `side_of_line` side.
    pub shade_positive: bool,
}

/// Builds the clearance-aware hatch polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedRegionBuilder {
    safety_margin: f64,
}

impl Default for ShadedRegionBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SAFETY_MARGIN_PX)
    }
}

impl ShadedRegionBuilder {
    /// Builder with a given minimum clearance in pixels (negative is treated as zero).
    pub fn new(safety_margin: f64) -> Self {
        Self {
            safety_margin: safety_margin.max(0.0),
        }
    }

    pub fn safety_margin(&self) -> f64 {
        self.safety_margin
    }

    /// Build the hatch polygon for one frame.
    ///
    /// `line` is the bearing line, `ship` the own-ship marker and
    /// `endpoints` every vector endpoint rendered this frame, all in
    /// screen space.
    pub fn build(&self, line: LineSegment, viewport: &Rect, ship: Point2D, endpoints: &[Point2D]) -> ShadedRegion {
        let LineSegment { a, b } = line;
        let ship_positive = side_of_line(a, b, ship) > 0.0;
        let shade_positive = !ship_positive;

        if line.length() <= DEGENERATE_LENGTH_EPSILON {
            log::debug!("shaded region: degenerate bearing line at {a}, nothing to shade");
            return ShadedRegion {
                polygon: Vec::new(),
                extended: line,
                offset_edge: line,
                gap: self.safety_margin,
                shade_positive,
            };
        }

        let extended = oriented_like(line_rect_intersection(a, b, viewport), line);
        let (p1, p2) = (extended.a, extended.b);

        // Unit normal on the positive side of p1 → p2.
        let normal = (p2 - p1).perp().normalize();
        let toward_shade = if shade_positive { normal } else { -normal };

        let gap = clearance_gap(p1, p2, endpoints, self.safety_margin);
        let offset_p1 = p1 + toward_shade * gap;
        let offset_p2 = p2 + toward_shade * gap;

        // Corners beyond the offset edge, then the edge itself.
        let mut candidates: Vec<Point2D> = viewport
            .corners()
            .into_iter()
            .filter(|c| (side_of_line(offset_p1, offset_p2, *c) > 0.0) == shade_positive)
            .collect();
        candidates.push(offset_p2);
        candidates.push(offset_p1);

        let polygon = convex_hull(&candidates);
        log::trace!(
            "shaded region: gap {gap:.2}px, {} candidates, {} hull vertices",
            candidates.len(),
            polygon.len()
        );

        ShadedRegion {
            polygon,
            extended,
            offset_edge: LineSegment::new(offset_p1, offset_p2),
            gap,
            shade_positive,
        }
    }
}

/// Clearance between the bearing line `p1 → p2` and the hatch.
///
/// The largest of `safety_margin` and the smallest perpendicular distance
/// from any endpoint to the line; just `safety_margin` with no endpoints.
pub fn clearance_gap(p1: Point2D, p2: Point2D, endpoints: &[Point2D], safety_margin: f64) -> f64 {
    endpoints
        .iter()
        .map(|e| perpendicular_distance(p1, p2, *e))
        .filter(|d| d.is_finite())
        .reduce(f64::min)
        .map_or(safety_margin, |nearest| nearest.max(safety_margin))
}

/// Flip `segment` if it runs against `reference`.
fn oriented_like(segment: LineSegment, reference: LineSegment) -> LineSegment {
    if segment.direction().dot(reference.direction()) < 0.0 {
        LineSegment::new(segment.b, segment.a)
    } else {
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn viewport() -> Rect {
        Rect::from_size(800.0, 600.0)
    }

    fn horizontal_line() -> LineSegment {
        LineSegment::new(Point2D::new(100.0, 300.0), Point2D::new(700.0, 300.0))
    }

    #[test]
    fn test_shades_side_away_from_ship() {
        let builder = ShadedRegionBuilder::default();
        // Ship above the line on screen (smaller y).
        let region = builder.build(horizontal_line(), &viewport(), Point2D::new(400.0, 100.0), &[]);

        assert_eq!(region.gap, DEFAULT_SAFETY_MARGIN_PX);
        assert!(!region.polygon.is_empty());
        for v in &region.polygon {
            assert!(v.y >= 300.0 + DEFAULT_SAFETY_MARGIN_PX - 1e-9, "vertex {v} intrudes on ship side");
        }
        // Bottom corners are part of the hatch.
        assert!(region.polygon.contains(&Point2D::new(800.0, 600.0)));
        assert!(region.polygon.contains(&Point2D::new(0.0, 600.0)));
    }

    #[test]
    fn test_extension_preserves_orientation() {
        let builder = ShadedRegionBuilder::default();
        let line = LineSegment::new(Point2D::new(80.0, 480.0), Point2D::new(720.0, 80.0));
        let region = builder.build(line, &viewport(), Point2D::new(720.0, 80.0), &[]);
        assert!(region.extended.direction().dot(line.direction()) > 0.0);
        assert_abs_diff_eq!(region.extended.a.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(region.extended.b.x, 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gap_grows_to_nearest_endpoint() {
        let builder = ShadedRegionBuilder::new(5.0);
        let endpoints = [Point2D::new(200.0, 340.0), Point2D::new(500.0, 270.0)];
        let region = builder.build(horizontal_line(), &viewport(), Point2D::new(400.0, 100.0), &endpoints);
        assert_abs_diff_eq!(region.gap, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(region.offset_edge.a.y, 330.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gap_never_below_margin() {
        let on_line = [Point2D::new(300.0, 300.0)];
        let gap = clearance_gap(Point2D::new(0.0, 300.0), Point2D::new(800.0, 300.0), &on_line, 5.0);
        assert_eq!(gap, 5.0);
        let gap = clearance_gap(Point2D::new(0.0, 300.0), Point2D::new(800.0, 300.0), &[], 7.5);
        assert_eq!(gap, 7.5);
    }

    #[test]
    fn test_degenerate_line_gives_empty_polygon() {
        let p = Point2D::new(50.0, 50.0);
        let region = ShadedRegionBuilder::default().build(LineSegment::new(p, p), &viewport(), Point2D::ZERO, &[]);
        assert!(region.polygon.is_empty());
    }

    #[test]
    fn test_line_outside_viewport_still_produces_polygon() {
        // Extension falls back to the unclipped segment.
        let line = LineSegment::new(Point2D::new(900.0, 0.0), Point2D::new(900.0, 600.0));
        let region = ShadedRegionBuilder::default().build(line, &viewport(), Point2D::new(1000.0, 300.0), &[]);
        assert_eq!(region.extended, line);
        assert!(region.polygon.len() >= 3);
    }

    #[test]
    fn test_negative_margin_clamped() {
        assert_eq!(ShadedRegionBuilder::new(-3.0).safety_margin(), 0.0);
    }
}
