//! Fundamental geometric and tactical types.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::VectorKind;

/// 2D point used for both world space (nautical miles, x = East, y = North)
/// and screen space (pixels, y down). Which space a point lives in is
/// determined by context; the two only meet through the coordinate transform.
pub type Point2D = glam::DVec2;

/// A line segment between two points in the same space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Point2D,
    pub b: Point2D,
}

impl LineSegment {
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Self { a, b }
    }

    /// Direction vector `b - a`.
    pub fn direction(&self) -> Point2D {
        self.b - self.a
    }

    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Point at parameter `t` along the segment (0 = a, 1 = b).
    pub fn lerp(&self, t: f64) -> Point2D {
        self.a + (self.b - self.a) * t
    }
}

/// Axis-aligned rectangle.
///
/// Width and height must be positive for any rectangle used as world
/// bounds; see [`Rect::is_degenerate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle from an origin corner and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Viewport rectangle anchored at (0, 0).
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// True unless both sides are positive and finite.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite())
    }

    /// Corners in edge order: (min,min), (max,min), (max,max), (min,max).
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.min_x, self.min_y),
            Point2D::new(self.max_x, self.min_y),
            Point2D::new(self.max_x, self.max_y),
            Point2D::new(self.min_x, self.max_y),
        ]
    }

    /// The four boundary edges, each running between consecutive corners.
    pub fn edges(&self) -> [LineSegment; 4] {
        let [c0, c1, c2, c3] = self.corners();
        [
            LineSegment::new(c0, c1),
            LineSegment::new(c1, c2),
            LineSegment::new(c2, c3),
            LineSegment::new(c3, c0),
        ]
    }

    /// Inclusive containment test with an absolute tolerance.
    pub fn contains(&self, p: Point2D, eps: f64) -> bool {
        p.x >= self.min_x - eps
            && p.x <= self.max_x + eps
            && p.y >= self.min_y - eps
            && p.y <= self.max_y + eps
    }

    /// Distance from `p` to the nearest boundary edge.
    pub fn distance_to_boundary(&self, p: Point2D) -> f64 {
        let inside = self.contains(p, 0.0);
        let dx_out = (self.min_x - p.x).max(p.x - self.max_x).max(0.0);
        let dy_out = (self.min_y - p.y).max(p.y - self.max_y).max(0.0);
        if inside {
            (p.x - self.min_x)
                .min(self.max_x - p.x)
                .min(p.y - self.min_y)
                .min(self.max_y - p.y)
        } else {
            (dx_out * dx_out + dy_out * dy_out).sqrt()
        }
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const HATCH_GRAY: Color = Color::rgba(80, 80, 80, 150);
    pub const GRID_GRAY: Color = Color::rgba(60, 60, 60, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A directional vector on the tactical display.
///
/// `origin` is in world space; `bearing_deg` is clockwise from North in
/// `[0, 360)`; `magnitude` is in nautical miles and never negative.
/// Presentation fields (`line_width`, `head_length`) are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TacticalVector {
    pub origin: Point2D,
    pub bearing_deg: f64,
    pub magnitude: f64,
    pub kind: VectorKind,
    pub color: Color,
    pub line_width: f64,
    pub head_length: f64,
    pub head_angle_deg: f64,
}

impl TacticalVector {
    pub fn new(origin: Point2D, bearing_deg: f64, magnitude: f64, kind: VectorKind) -> Self {
        Self {
            origin,
            bearing_deg: normalize_bearing(bearing_deg),
            magnitude: magnitude.max(0.0),
            kind,
            color: Color::WHITE,
            line_width: DEFAULT_VECTOR_WIDTH,
            head_length: DEFAULT_HEAD_LENGTH,
            head_angle_deg: DEFAULT_HEAD_ANGLE_DEG,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_head(mut self, head_length: f64, head_angle_deg: f64) -> Self {
        self.head_length = head_length;
        self.head_angle_deg = head_angle_deg;
        self
    }
}

/// Sonar beam / bearing line between the sensor and a contact (world space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SonarBeam {
    pub start: Point2D,
    pub end: Point2D,
    pub width_deg: f64,
    pub color: Color,
    pub line_width: f64,
}

impl SonarBeam {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self {
            start,
            end,
            width_deg: DEFAULT_BEAM_WIDTH_DEG,
            color: Color::GREEN,
            line_width: DEFAULT_BEAM_LINE_WIDTH,
        }
    }

    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }
}

/// Normalize a bearing into `[0, 360)`.
pub fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}
