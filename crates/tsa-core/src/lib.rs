//! Core types and definitions for the TSA tactical display.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, tactical vectors, the simulation state snapshot,
//! draw primitives, display commands, and constants.
//! It has no dependency on any windowing or rendering backend.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod primitives;
pub mod state;
pub mod types;

pub use error::ConfigError;
pub use types::Point2D;
