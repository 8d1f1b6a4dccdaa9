//! Simulation state snapshot: the complete kinematic picture the renderer reads.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Point2D;

/// Kinematic state published by the simulation clock after each tick.
///
/// Positions are world space (nautical miles, x = East, y = North).
/// A published snapshot is never mutated; the clock builds a new one
/// each tick and swaps it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Ticks applied since start.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub time_sec: f64,
    pub own_ship_course_deg: f64,
    /// Knots.
    pub own_ship_speed_kn: f64,
    pub own_ship_pos: Point2D,
    pub target_course_deg: f64,
    /// Knots.
    pub target_speed_kn: f64,
    pub target_pos: Point2D,
    /// Bearing from own ship to target, degrees true in `[0, 360)`.
    pub bearing_deg: f64,
    /// Range from own ship to target (nautical miles).
    pub range_nm: f64,
    /// Wrap-corrected bearing rate (degrees per second).
    pub bearing_rate_deg_per_sec: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        let (tx, ty) = TARGET_INITIAL_POSITION;
        Self {
            tick: 0,
            time_sec: 0.0,
            own_ship_course_deg: OWN_SHIP_INITIAL_COURSE,
            own_ship_speed_kn: OWN_SHIP_INITIAL_SPEED,
            own_ship_pos: Point2D::ZERO,
            target_course_deg: TARGET_INITIAL_COURSE,
            target_speed_kn: TARGET_INITIAL_SPEED,
            target_pos: Point2D::new(tx, ty),
            bearing_deg: 0.0,
            range_nm: 0.0,
            bearing_rate_deg_per_sec: 0.0,
        }
    }
}

impl SimulationState {
    /// Target position relative to own ship.
    pub fn relative_position(&self) -> Point2D {
        self.target_pos - self.own_ship_pos
    }
}
