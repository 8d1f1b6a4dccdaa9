//! Frame builder for the TSA tactical display.
//!
//! Turns a `SimulationState` snapshot into an ordered list of
//! screen-space draw primitives for whatever backend the host supplies.

pub mod picture;
pub mod render;
pub mod style;

pub use picture::TacticalPicture;
pub use render::{DisplayConfig, TacticalRenderer};
pub use style::DisplayStyle;
pub use tsa_core as core;
