//! Geometry engine for the TSA tactical display.
//!
//! World/screen coordinate mapping, line and rectangle clipping,
//! convex hulls, tactical vector projection, and the clearance-aware
//! half-plane shading used to mark inactive sensor coverage.

pub mod geometry;
pub mod shading;
pub mod transform;
pub mod vectors;

pub use tsa_core as core;

// Re-export key types for convenience.
pub use geometry::{convex_hull, line_rect_intersection, side_of_line};
pub use shading::{ShadedRegion, ShadedRegionBuilder};
pub use transform::{AffineTransform, CoordinateTransform};
pub use vectors::{arrowhead_points, endpoint, project_vector, range_and_bearing, ScreenVector};

#[cfg(test)]
mod tests;
