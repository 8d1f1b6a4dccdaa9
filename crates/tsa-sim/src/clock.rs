//! Simulation clock: owns kinematic state and publishes snapshots.
//!
//! The clock never mutates a published snapshot. Each tick computes a
//! complete new `SimulationState` and swaps the shared handle, so a
//! renderer holding the previous `Arc` keeps a consistent picture.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use tsa_core::constants::*;
use tsa_core::enums::ClockState;
use tsa_core::state::SimulationState;
use tsa_core::types::Point2D;

use crate::kinematics;

/// Configuration for starting a new simulation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Tick interval in milliseconds.
    pub interval_ms: u64,
    pub own_ship_course_deg: f64,
    pub own_ship_speed_kn: f64,
    /// Own ship start position (nm).
    pub own_ship_start: Point2D,
    pub target_course_deg: f64,
    pub target_speed_kn: f64,
    /// Target start position (nm).
    pub target_start: Point2D,
    /// Start in the running state.
    pub autostart: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        let (tx, ty) = TARGET_INITIAL_POSITION;
        Self {
            interval_ms: DEFAULT_TICK_INTERVAL_MS,
            own_ship_course_deg: OWN_SHIP_INITIAL_COURSE,
            own_ship_speed_kn: OWN_SHIP_INITIAL_SPEED,
            own_ship_start: Point2D::ZERO,
            target_course_deg: TARGET_INITIAL_COURSE,
            target_speed_kn: TARGET_INITIAL_SPEED,
            target_start: Point2D::new(tx, ty),
            autostart: true,
        }
    }
}

/// Pending kinematic changes, folded into the next tick.
#[derive(Debug, Clone, Copy, Default)]
struct PendingOrders {
    own_ship: Option<(f64, f64)>,
    target: Option<(f64, f64)>,
    target_fix: Option<(f64, f64)>,
}

/// Fixed-interval kinematic clock.
///
/// The host's scheduler calls [`SimulationClock::tick`] once per
/// [`SimulationClock::interval`]; the clock itself owns no timer.
pub struct SimulationClock {
    run_state: ClockState,
    interval_ms: u64,
    published: Arc<SimulationState>,
    pending: PendingOrders,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

impl SimulationClock {
    /// Create a clock with the initial kinematics from `config`.
    pub fn new(config: ClockConfig) -> Self {
        let mut initial = SimulationState {
            own_ship_course_deg: config.own_ship_course_deg,
            own_ship_speed_kn: config.own_ship_speed_kn,
            own_ship_pos: config.own_ship_start,
            target_course_deg: config.target_course_deg,
            target_speed_kn: config.target_speed_kn,
            target_pos: config.target_start,
            ..SimulationState::default()
        };
        initial = kinematics::with_own_ship(&initial, initial.own_ship_course_deg, initial.own_ship_speed_kn);
        initial = kinematics::with_target(&initial, initial.target_course_deg, initial.target_speed_kn);
        kinematics::measure(&mut initial);

        log::info!(
            "clock created: interval {}ms, bearing {:.2}, range {:.3}",
            config.interval_ms,
            initial.bearing_deg,
            initial.range_nm
        );

        Self {
            run_state: if config.autostart {
                ClockState::Running
            } else {
                ClockState::Stopped
            },
            interval_ms: clamp_interval(config.interval_ms),
            published: Arc::new(initial),
            pending: PendingOrders::default(),
        }
    }

    /// Advance one interval and publish the new snapshot.
    ///
    /// While stopped this returns the last snapshot unchanged.
    pub fn tick(&mut self) -> Arc<SimulationState> {
        if self.run_state == ClockState::Stopped {
            return self.snapshot();
        }

        let mut base = (*self.published).clone();
        if let Some((course, speed)) = self.pending.own_ship.take() {
            base = kinematics::with_own_ship(&base, course, speed);
        }
        if let Some((course, speed)) = self.pending.target.take() {
            base = kinematics::with_target(&base, course, speed);
        }
        if let Some((bearing, range)) = self.pending.target_fix.take() {
            base = kinematics::with_target_fix(&base, bearing, range);
        }

        let next = kinematics::advance(&base, self.interval_ms);
        log::info!(
            "time {:.1}s bearing {:.2} range {:.3} rate {:.4}",
            next.time_sec,
            next.bearing_deg,
            next.range_nm,
            next.bearing_rate_deg_per_sec
        );

        self.published = Arc::new(next);
        self.snapshot()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<SimulationState> {
        Arc::clone(&self.published)
    }

    pub fn start(&mut self) {
        if self.run_state != ClockState::Running {
            log::debug!("clock started");
        }
        self.run_state = ClockState::Running;
    }

    /// Stop ticking. The last snapshot stays valid indefinitely.
    pub fn stop(&mut self) {
        if self.run_state != ClockState::Stopped {
            log::debug!("clock stopped at {:.1}s", self.published.time_sec);
        }
        self.run_state = ClockState::Stopped;
    }

    pub fn run_state(&self) -> ClockState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == ClockState::Running
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Change the tick interval. Subsequent ticks advance time by the new interval.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = clamp_interval(interval_ms);
        log::debug!("clock interval set to {}ms", self.interval_ms);
    }

    /// Order a new own-ship course (degrees) and speed (knots) from the next tick.
    pub fn set_own_ship(&mut self, course_deg: f64, speed_kn: f64) {
        self.pending.own_ship = Some((course_deg, speed_kn));
    }

    /// Reposition the target by bearing (degrees) and range (nm) from own
    /// ship before the next tick's motion.
    pub fn set_target_position(&mut self, bearing_deg: f64, range_nm: f64) {
        self.pending.target_fix = Some((bearing_deg, range_nm));
    }

    /// Order a new target course (degrees) and speed (knots) from the next tick.
    pub fn set_target(&mut self, course_deg: f64, speed_kn: f64) {
        self.pending.target = Some((course_deg, speed_kn));
    }
}

fn clamp_interval(interval_ms: u64) -> u64 {
    if interval_ms < MIN_TICK_INTERVAL_MS {
        log::warn!("tick interval {interval_ms}ms clamped to {MIN_TICK_INTERVAL_MS}ms");
        MIN_TICK_INTERVAL_MS
    } else {
        interval_ms
    }
}
