//! Constant-velocity kinematics and bearing/range/rate measurement.
//!
//! Positions are nautical miles and speeds knots, so a step of
//! `speed * Δt_hours` is exactly nautical miles.

use tsa_core::constants::{MS_PER_HOUR, MS_PER_SECOND};
use tsa_core::state::SimulationState;
use tsa_core::types::{normalize_bearing, Point2D};
use tsa_geometry::vectors::{course_unit, range_and_bearing, wrap_bearing_delta};

/// Displacement (nm) after `dt_hours` at `speed_kn` on `course_deg`.
pub fn displacement(course_deg: f64, speed_kn: f64, dt_hours: f64) -> Point2D {
    course_unit(course_deg) * (speed_kn * dt_hours)
}

/// Fill in bearing and range from the positions; rate is left untouched.
pub fn measure(state: &mut SimulationState) {
    let (range, bearing) = range_and_bearing(state.relative_position());
    state.range_nm = range;
    state.bearing_deg = bearing;
}

/// Compute the state one interval of `dt_ms` after `prev`.
///
/// `prev` is not modified; the caller publishes the returned state.
pub fn advance(prev: &SimulationState, dt_ms: u64) -> SimulationState {
    let dt_ms = dt_ms as f64;
    let dt_hours = dt_ms / MS_PER_HOUR;
    let dt_sec = dt_ms / MS_PER_SECOND;

    let mut next = SimulationState {
        tick: prev.tick + 1,
        time_sec: prev.time_sec + dt_sec,
        own_ship_pos: prev.own_ship_pos
            + displacement(prev.own_ship_course_deg, prev.own_ship_speed_kn, dt_hours),
        target_pos: prev.target_pos
            + displacement(prev.target_course_deg, prev.target_speed_kn, dt_hours),
        ..prev.clone()
    };
    measure(&mut next);

    next.bearing_rate_deg_per_sec = if dt_sec > 0.0 {
        wrap_bearing_delta(next.bearing_deg - prev.bearing_deg) / dt_sec
    } else {
        0.0
    };
    next
}

/// Place the target at `range_nm` on `bearing_deg` from own ship and
/// re-measure, so the jump does not show up as bearing rate.
pub fn with_target_fix(state: &SimulationState, bearing_deg: f64, range_nm: f64) -> SimulationState {
    let mut fixed = SimulationState {
        target_pos: state.own_ship_pos + course_unit(normalize_bearing(bearing_deg)) * range_nm.max(0.0),
        ..state.clone()
    };
    measure(&mut fixed);
    fixed
}

/// Replace own ship course and speed, keeping position.
pub fn with_own_ship(state: &SimulationState, course_deg: f64, speed_kn: f64) -> SimulationState {
    SimulationState {
        own_ship_course_deg: normalize_bearing(course_deg),
        own_ship_speed_kn: speed_kn.max(0.0),
        ..state.clone()
    }
}

/// Replace target course and speed, keeping position.
pub fn with_target(state: &SimulationState, course_deg: f64, speed_kn: f64) -> SimulationState {
    SimulationState {
        target_course_deg: normalize_bearing(course_deg),
        target_speed_kn: speed_kn.max(0.0),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_knots_times_hours_is_nautical_miles() {
        let d = displacement(0.0, 10.0, 1.0);
        assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 10.0, epsilon = 1e-12);

        let d = displacement(90.0, 8.0, 0.5);
        assert_abs_diff_eq!(d.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_advance_moves_both_ships() {
        let mut s = SimulationState::default();
        measure(&mut s);
        let next = advance(&s, 3_600_000);

        assert_eq!(next.tick, 1);
        assert_abs_diff_eq!(next.time_sec, 3600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.own_ship_pos.y, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.target_pos.x, 11.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.target_pos.y, 3.0, epsilon = 1e-9);
        // Relative (11, -7).
        assert_abs_diff_eq!(next.range_nm, (11.0f64 * 11.0 + 49.0).sqrt(), epsilon = 1e-9);
        assert!(next.bearing_deg > 90.0 && next.bearing_deg < 180.0);
    }

    #[test]
    fn test_advance_does_not_touch_previous() {
        let s = SimulationState::default();
        let before = s.clone();
        let _ = advance(&s, 2000);
        assert_eq!(s, before);
    }

    #[test]
    fn test_zero_interval_has_zero_rate() {
        let s = SimulationState::default();
        let next = advance(&s, 0);
        assert_eq!(next.bearing_rate_deg_per_sec, 0.0);
    }

    #[test]
    fn test_course_updates_normalize() {
        let s = with_own_ship(&SimulationState::default(), -90.0, -4.0);
        assert_eq!(s.own_ship_course_deg, 270.0);
        assert_eq!(s.own_ship_speed_kn, 0.0);

        let s = with_target(&s, 370.0, 12.0);
        assert_eq!(s.target_course_deg, 10.0);
        assert_eq!(s.target_speed_kn, 12.0);
    }

    #[test]
    fn test_target_fix_from_bearing_and_range() {
        let state = SimulationState {
            own_ship_pos: Point2D::new(1.0, 1.0),
            ..SimulationState::default()
        };
        let fixed = with_target_fix(&state, 90.0, 4.0);
        assert_abs_diff_eq!(fixed.target_pos.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fixed.target_pos.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fixed.bearing_deg, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fixed.range_nm, 4.0, epsilon = 1e-12);
        assert_eq!(fixed.target_course_deg, state.target_course_deg);
    }
}
