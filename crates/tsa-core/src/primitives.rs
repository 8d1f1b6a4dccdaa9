//! Draw primitives handed to the host renderer, in paint order.

use serde::{Deserialize, Serialize};

use crate::enums::{HatchPattern, LineCap};
use crate::types::{Color, Point2D, Rect};

/// One screen-space drawing instruction.
///
/// A frame is an ordered `Vec<DrawPrimitive>`; the backend paints them
/// front to back exactly as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawPrimitive {
    /// Solid background fill.
    FillRect { rect: Rect, color: Color },
    /// Filled polygon with a hatch pattern and no stroke.
    Polygon {
        points: Vec<Point2D>,
        pattern: HatchPattern,
        color: Color,
        opacity: f64,
    },
    /// Stroked line.
    Line {
        from: Point2D,
        to: Point2D,
        color: Color,
        width: f64,
        cap: LineCap,
    },
    /// Filled circle marker.
    Circle {
        center: Point2D,
        radius: f64,
        color: Color,
    },
    /// Filled triangle (arrowheads).
    Triangle { points: [Point2D; 3], color: Color },
}

impl DrawPrimitive {
    /// Short name used in logs and frame summaries.
    pub fn name(&self) -> &'static str {
        match self {
            DrawPrimitive::FillRect { .. } => "fill_rect",
            DrawPrimitive::Polygon { .. } => "polygon",
            DrawPrimitive::Line { .. } => "line",
            DrawPrimitive::Circle { .. } => "circle",
            DrawPrimitive::Triangle { .. } => "triangle",
        }
    }
}
