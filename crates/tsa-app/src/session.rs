//! The clock and renderer pair the display loop drives.

use std::sync::Arc;

use tsa_core::commands::DisplayCommand;
use tsa_core::error::ConfigError;
use tsa_core::state::SimulationState;
use tsa_display::TacticalRenderer;
use tsa_sim::SimulationClock;

use crate::config::AppConfig;
use crate::state::Frame;

pub struct DisplaySession {
    clock: SimulationClock,
    renderer: TacticalRenderer,
}

impl DisplaySession {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            clock: SimulationClock::new(config.clock.clone()),
            renderer: TacticalRenderer::new(config.display.clone())?,
        })
    }

    /// Apply one host command. Called between frames only.
    pub fn apply(&mut self, command: DisplayCommand) {
        log::debug!("applying {command:?}");
        match command {
            DisplayCommand::Start => self.clock.start(),
            DisplayCommand::Stop => self.clock.stop(),
            DisplayCommand::SetInterval { ms } => self.clock.set_interval_ms(ms),
            DisplayCommand::SetOwnShip { course, speed } => self.clock.set_own_ship(course, speed),
            DisplayCommand::SetTarget { course, speed } => self.clock.set_target(course, speed),
            DisplayCommand::SetTargetPosition { bearing, range } => {
                self.clock.set_target_position(bearing, range)
            }
            DisplayCommand::SetWorldBounds { bounds } => {
                if let Err(err) = self.renderer.set_world_bounds(bounds) {
                    log::warn!("ignoring world bounds {bounds:?}: {err}");
                }
            }
            DisplayCommand::Resize { width, height } => self.renderer.resize(width, height),
            DisplayCommand::SetBeamWidth { width_deg } => {
                self.renderer.picture_mut().set_beam_width(width_deg)
            }
            DisplayCommand::AddVector { vector } => self.renderer.add_vector(vector),
            DisplayCommand::ClearVectors => self.renderer.clear_vectors(),
        }
    }

    /// Advance the clock one interval and render the new snapshot.
    pub fn step(&mut self) -> Frame {
        let state = self.clock.tick();
        self.frame_for(state)
    }

    /// Render the current snapshot without advancing the clock.
    pub fn redraw(&self) -> Frame {
        self.frame_for(self.clock.snapshot())
    }

    fn frame_for(&self, state: Arc<SimulationState>) -> Frame {
        let primitives = self.renderer.render(&state);
        Frame { state, primitives }
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn renderer(&self) -> &TacticalRenderer {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsa_core::enums::ClockState;

    #[test]
    fn test_clock_commands() {
        let mut session = DisplaySession::new(&AppConfig::default()).unwrap();

        session.apply(DisplayCommand::SetInterval { ms: 500 });
        assert_eq!(session.clock().interval_ms(), 500);

        session.apply(DisplayCommand::Stop);
        assert_eq!(session.clock().run_state(), ClockState::Stopped);
        let held = session.step();
        assert_eq!(held.state.tick, 0);

        session.apply(DisplayCommand::Start);
        assert_eq!(session.step().state.tick, 1);
    }

    #[test]
    fn test_kinematic_commands_reach_next_state() {
        let mut session = DisplaySession::new(&AppConfig::default()).unwrap();
        session.apply(DisplayCommand::SetOwnShip { course: 270.0, speed: 12.0 });
        session.apply(DisplayCommand::SetTarget { course: 180.0, speed: 4.0 });

        let frame = session.step();
        assert_eq!(frame.state.own_ship_course_deg, 270.0);
        assert_eq!(frame.state.own_ship_speed_kn, 12.0);
        assert_eq!(frame.state.target_course_deg, 180.0);
        assert_eq!(frame.state.target_speed_kn, 4.0);
    }

    #[test]
    fn test_target_position_and_beam_width() {
        let mut session = DisplaySession::new(&AppConfig::default()).unwrap();
        session.apply(DisplayCommand::SetOwnShip { course: 0.0, speed: 0.0 });
        session.apply(DisplayCommand::SetTarget { course: 0.0, speed: 0.0 });
        session.apply(DisplayCommand::SetTargetPosition { bearing: 180.0, range: 5.0 });
        session.apply(DisplayCommand::SetBeamWidth { width_deg: 12.0 });

        let frame = session.step();
        assert!((frame.state.bearing_deg - 180.0).abs() < 1e-9);
        assert!((frame.state.range_nm - 5.0).abs() < 1e-12);
        // Repositioning is not motion.
        assert_eq!(frame.state.bearing_rate_deg_per_sec, 0.0);
        assert_eq!(session.renderer().picture().beam_width_deg, 12.0);
    }

    #[test]
    fn test_redraw_does_not_tick() {
        let mut session = DisplaySession::new(&AppConfig::default()).unwrap();
        session.apply(DisplayCommand::Resize { width: 1024.0, height: 768.0 });
        let frame = session.redraw();
        assert_eq!(frame.state.tick, 0);
        assert_eq!(session.renderer().transform().viewport(), tsa_core::types::Rect::from_size(1024.0, 768.0));
    }
}
