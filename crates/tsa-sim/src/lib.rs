//! Simulation clock for the TSA tactical display.
//!
//! Advances own-ship and target kinematics on a fixed interval and
//! publishes immutable `SimulationState` snapshots for the renderer.

pub mod clock;
pub mod kinematics;

pub use clock::{ClockConfig, SimulationClock};
pub use tsa_core as core;
