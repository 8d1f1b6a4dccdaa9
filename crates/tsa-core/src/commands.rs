//! Display commands sent from the host to the display loop.
//!
//! Commands are queued and applied at the next frame boundary, never
//! in the middle of a render pass.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, TacticalVector};

/// All host-initiated changes to the tactical display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DisplayCommand {
    // --- Clock control ---
    /// Resume ticking.
    Start,
    /// Halt ticking; the last snapshot stays renderable.
    Stop,
    /// Change the tick interval (milliseconds).
    SetInterval { ms: u64 },

    // --- Kinematics ---
    /// Set own ship course (degrees) and speed (knots).
    SetOwnShip { course: f64, speed: f64 },
    /// Set target course (degrees) and speed (knots).
    SetTarget { course: f64, speed: f64 },
    /// Place the target by bearing (degrees) and range (nm) from own ship.
    SetTargetPosition { bearing: f64, range: f64 },

    // --- Geometry ---
    /// Replace the world bounds shown in the viewport.
    SetWorldBounds { bounds: Rect },
    /// Viewport resized (pixels).
    Resize { width: f64, height: f64 },
    /// Sonar beam width (degrees) drawn around the bearing line.
    SetBeamWidth { width_deg: f64 },

    // --- Vectors ---
    /// Add an extra tactical vector to every subsequent frame.
    AddVector { vector: TacticalVector },
    /// Remove all extra tactical vectors.
    ClearVectors,
}
