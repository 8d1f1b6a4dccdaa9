//! Colors, widths and patterns used when building a frame.

use serde::{Deserialize, Serialize};

use tsa_core::constants::*;
use tsa_core::enums::HatchPattern;
use tsa_core::types::Color;

/// Visual styling for every primitive the renderer emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayStyle {
    pub background: Color,

    pub grid_enabled: bool,
    pub grid_color: Color,
    /// Grid spacing in nautical miles.
    pub grid_spacing_nm: f64,
    pub grid_line_width: f64,

    pub hatch_color: Color,
    pub hatch_pattern: HatchPattern,
    pub hatch_opacity: f64,

    pub beam_color: Color,
    pub beam_line_width: f64,
    /// Thin lines marking the beam's angular width.
    pub beam_edge_color: Color,
    pub beam_edge_width: f64,

    pub marker_radius: f64,
    pub own_ship_color: Color,
    pub sensor_color: Color,
    pub contact_color: Color,

    pub own_ship_vector_color: Color,
    pub trial_vector_color: Color,
    pub adopted_vector_color: Color,
    pub rate_vector_color: Color,
    pub vector_line_width: f64,
    pub rate_line_width: f64,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            grid_enabled: true,
            grid_color: Color::GRID_GRAY,
            grid_spacing_nm: GRID_SPACING_NM,
            grid_line_width: GRID_LINE_WIDTH,
            hatch_color: Color::HATCH_GRAY,
            hatch_pattern: HatchPattern::BackwardDiagonal,
            hatch_opacity: HATCH_OPACITY,
            beam_color: Color::GREEN,
            beam_line_width: DEFAULT_BEAM_LINE_WIDTH,
            beam_edge_color: Color::rgba(0, 255, 0, 110),
            beam_edge_width: 1.0,
            marker_radius: MARKER_RADIUS_PX,
            own_ship_color: Color::YELLOW,
            sensor_color: Color::RED,
            contact_color: Color::WHITE,
            own_ship_vector_color: Color::CYAN,
            trial_vector_color: Color::YELLOW,
            adopted_vector_color: Color::RED,
            rate_vector_color: Color::CYAN,
            vector_line_width: 3.0,
            rate_line_width: 2.0,
        }
    }
}
