//! What the tactical picture shows, derived from a state snapshot.
//!
//! The sensor trails astern of own ship; the bearing line runs from the
//! sensor to the contact. Own-ship, trial-course, adopted-track and
//! bearing-rate vectors are rebuilt from each snapshot, and any extra
//! vectors the host added are drawn alongside them.

use serde::{Deserialize, Serialize};

use tsa_core::constants::*;
use tsa_core::enums::VectorKind;
use tsa_core::state::SimulationState;
use tsa_core::types::{Point2D, SonarBeam, TacticalVector};
use tsa_geometry::vectors::course_unit;

use crate::style::DisplayStyle;

/// Per-picture presentation settings plus host-added vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticalPicture {
    /// Sensor distance astern of own ship (nm).
    pub sensor_trail_nm: f64,
    /// Beam width carried on the bearing line (degrees).
    pub beam_width_deg: f64,
    /// Minutes of travel shown by own-ship and adopted-track vectors.
    pub lead_minutes: f64,
    /// Trial course offset from own course; `None` hides the trial vector.
    pub trial_offset_deg: Option<f64>,
    pub trial_minutes: f64,
    /// Bearing-rate indicator length per deg/s (nm).
    pub rate_scale_nm: f64,
    /// Longest bearing-rate indicator (nm).
    pub rate_max_nm: f64,
    extra_vectors: Vec<TacticalVector>,
}

impl Default for TacticalPicture {
    fn default() -> Self {
        Self {
            sensor_trail_nm: SENSOR_TRAIL_DISTANCE_NM,
            beam_width_deg: DEFAULT_BEAM_WIDTH_DEG,
            lead_minutes: VECTOR_LEAD_MINUTES,
            trial_offset_deg: Some(TRIAL_COURSE_OFFSET_DEG),
            trial_minutes: TRIAL_VECTOR_MINUTES,
            rate_scale_nm: BEARING_RATE_SCALE_NM,
            rate_max_nm: BEARING_RATE_MAX_NM,
            extra_vectors: Vec::new(),
        }
    }
}

impl TacticalPicture {
    pub fn add_vector(&mut self, vector: TacticalVector) {
        self.extra_vectors.push(vector);
    }

    pub fn clear_vectors(&mut self) {
        self.extra_vectors.clear();
    }

    /// Beam width in degrees; negative or non-finite widths hide the edges.
    pub fn set_beam_width(&mut self, width_deg: f64) {
        self.beam_width_deg = if width_deg.is_finite() { width_deg.max(0.0) } else { 0.0 };
    }

    /// Host-added vectors.
    pub fn extra_vectors(&self) -> &[TacticalVector] {
        &self.extra_vectors
    }

    /// Towed sensor position: `sensor_trail_nm` astern of own ship.
    pub fn sensor_position(&self, state: &SimulationState) -> Point2D {
        state.own_ship_pos - course_unit(state.own_ship_course_deg) * self.sensor_trail_nm
    }

    /// Bearing line from the sensor to the contact (world space).
    pub fn bearing_line(&self, state: &SimulationState, style: &DisplayStyle) -> SonarBeam {
        SonarBeam {
            width_deg: self.beam_width_deg,
            color: style.beam_color,
            line_width: style.beam_line_width,
            ..SonarBeam::new(self.sensor_position(state), state.target_pos)
        }
    }

    /// Every vector drawn this frame: derived ones first, then extras.
    pub fn frame_vectors(&self, state: &SimulationState, style: &DisplayStyle) -> Vec<TacticalVector> {
        let lead_hours = self.lead_minutes / 60.0;
        let mut vectors = Vec::with_capacity(4 + self.extra_vectors.len());

        vectors.push(
            TacticalVector::new(
                state.own_ship_pos,
                state.own_ship_course_deg,
                state.own_ship_speed_kn * lead_hours,
                VectorKind::OwnShip,
            )
            .with_color(style.own_ship_vector_color)
            .with_line_width(style.vector_line_width),
        );

        if let Some(offset) = self.trial_offset_deg {
            vectors.push(
                TacticalVector::new(
                    state.own_ship_pos,
                    state.own_ship_course_deg + offset,
                    state.own_ship_speed_kn * self.trial_minutes / 60.0,
                    VectorKind::TrialCourse,
                )
                .with_color(style.trial_vector_color)
                .with_line_width(style.vector_line_width),
            );
        }

        vectors.push(
            TacticalVector::new(
                state.target_pos,
                state.target_course_deg,
                state.target_speed_kn * lead_hours,
                VectorKind::AdoptedTrack,
            )
            .with_color(style.adopted_vector_color)
            .with_line_width(style.vector_line_width),
        );

        if let Some(rate) = self.rate_vector(state, style) {
            vectors.push(rate);
        }

        vectors.extend_from_slice(&self.extra_vectors);
        vectors
    }

    /// Bearing drift indicator at the contact, perpendicular to the bearing.
    fn rate_vector(&self, state: &SimulationState, style: &DisplayStyle) -> Option<TacticalVector> {
        let rate = state.bearing_rate_deg_per_sec;
        if !rate.is_finite() || rate.abs() < BEARING_RATE_EPSILON {
            return None;
        }
        let drift = if rate > 0.0 { 90.0 } else { -90.0 };
        let length = (rate.abs() * self.rate_scale_nm).min(self.rate_max_nm);
        Some(
            TacticalVector::new(state.target_pos, state.bearing_deg + drift, length, VectorKind::BearingRate)
                .with_color(style.rate_vector_color)
                .with_line_width(style.rate_line_width)
                .with_head(RATE_HEAD_LENGTH, RATE_HEAD_ANGLE_DEG),
        )
    }
}
