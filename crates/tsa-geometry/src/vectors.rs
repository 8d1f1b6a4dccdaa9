//! Tactical vector math: bearings, endpoints, arrowheads, range/bearing.
//!
//! Bearings are degrees clockwise from North. On screen North is "up"
//! (negative y), so a bearing turns into the direction `(sin b, -cos b)`.
//! In world space North is positive y and the same bearing is `(sin b, cos b)`;
//! the coordinate transform's y flip makes the two agree on screen.

use std::f64::consts::PI;

use tsa_core::constants::DEGENERATE_LENGTH_EPSILON;
use tsa_core::types::{Color, LineSegment, Point2D, TacticalVector};

use crate::transform::CoordinateTransform;

/// Screen-space unit direction for a bearing.
pub fn screen_direction(bearing_deg: f64) -> Point2D {
    let (sin, cos) = bearing_deg.to_radians().sin_cos();
    Point2D::new(sin, -cos)
}

/// World-space unit direction for a course (x = East, y = North).
pub fn course_unit(course_deg: f64) -> Point2D {
    let (sin, cos) = course_deg.to_radians().sin_cos();
    Point2D::new(sin, cos)
}

/// Screen-space endpoint of a vector of `magnitude` pixels along `bearing_deg`.
pub fn endpoint(origin: Point2D, bearing_deg: f64, magnitude: f64) -> Point2D {
    origin + screen_direction(bearing_deg) * magnitude
}

/// Filled arrowhead triangle `(tip, wing1, wing2)` for a shaft `from → to`.
///
/// Each wing sits `head_length` back from the tip, swung `head_angle_deg`
/// off the reversed shaft.
pub fn arrowhead_points(from: Point2D, to: Point2D, head_length: f64, head_angle_deg: f64) -> [Point2D; 3] {
    let shaft = to - from;
    let theta = shaft.y.atan2(shaft.x);
    let spread = PI - head_angle_deg.to_radians();

    let wing = |angle: f64| {
        let (sin, cos) = angle.sin_cos();
        to + Point2D::new(cos, sin) * head_length
    };
    [to, wing(theta + spread), wing(theta - spread)]
}

/// Range and bearing of a relative position `(x East, y North)`.
///
/// Bearing is `atan2(x, y)` (from North, clockwise) in `[0, 360)`.
pub fn range_and_bearing(relative: Point2D) -> (f64, f64) {
    (range_from(relative.x, relative.y), bearing_from(relative.x, relative.y))
}

pub fn range_from(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

pub fn bearing_from(x: f64, y: f64) -> f64 {
    let b = x.atan2(y).to_degrees();
    let b = if b < 0.0 { b + 360.0 } else { b };
    // Adding 360 to a tiny negative angle rounds to exactly 360.
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Fold a bearing difference into `[-180, 180]` with a single ±360 step.
pub fn wrap_bearing_delta(delta_deg: f64) -> f64 {
    if delta_deg > 180.0 {
        delta_deg - 360.0
    } else if delta_deg < -180.0 {
        delta_deg + 360.0
    } else {
        delta_deg
    }
}

/// The two edges of a beam `width_deg` wide, centered on `start → end`
/// and as long as it. `None` for a zero-width beam or a degenerate line.
pub fn beam_edges(start: Point2D, end: Point2D, width_deg: f64) -> Option<[LineSegment; 2]> {
    let axis = end - start;
    if !(width_deg.is_finite() && width_deg > 0.0) || axis.length() <= DEGENERATE_LENGTH_EPSILON {
        return None;
    }
    let edge = |half: f64| {
        let (sin, cos) = half.sin_cos();
        let rotated = Point2D::new(axis.x * cos - axis.y * sin, axis.x * sin + axis.y * cos);
        LineSegment::new(start, start + rotated)
    };
    let half = (width_deg / 2.0).to_radians();
    Some([edge(half), edge(-half)])
}

/// A tactical vector resolved into screen space for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVector {
    pub from: Point2D,
    pub to: Point2D,
    pub head: [Point2D; 3],
    pub color: Color,
    pub line_width: f64,
}

/// Project a world-space tactical vector into screen space.
///
/// The origin is mapped through the transform and the magnitude converted
/// with [`CoordinateTransform::distance_to_screen`]; the endpoint and head
/// are then built in screen space.
pub fn project_vector(vector: &TacticalVector, transform: &CoordinateTransform) -> ScreenVector {
    let from = transform.to_screen(vector.origin);
    let length = transform.distance_to_screen(vector.magnitude);
    let to = endpoint(from, vector.bearing_deg, length);
    ScreenVector {
        from,
        to,
        head: arrowhead_points(from, to, vector.head_length, vector.head_angle_deg),
        color: vector.color,
        line_width: vector.line_width,
    }
}
