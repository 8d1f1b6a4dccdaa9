//! Headless host for the TSA tactical display.
//!
//! Wires the clock and the renderer together on a display-loop thread,
//! feeds them host commands and hands every frame to a sink.

pub mod config;
pub mod display_loop;
pub mod input;
pub mod session;
pub mod sink;
pub mod state;

pub use tsa_core as core;
