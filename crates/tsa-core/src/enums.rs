//! Enumeration types used throughout the display and simulation.

use serde::{Deserialize, Serialize};

/// Tactical vector classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorKind {
    /// Own ship course and speed.
    #[default]
    OwnShip,
    /// Raw target track.
    Target,
    /// Sonar beam direction.
    SonarBearing,
    /// Adopted target track (solution course and speed).
    AdoptedTrack,
    /// Intercept course.
    InterceptCourse,
    /// Collision avoidance course.
    CollisionAvoidance,
    /// Candidate own-ship course under evaluation.
    TrialCourse,
    /// Bearing drift indicator.
    BearingRate,
}

/// Simulation clock run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    #[default]
    Running,
    Stopped,
}

/// Fill pattern for shaded polygons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HatchPattern {
    /// Lines running bottom-left to top-right.
    #[default]
    BackwardDiagonal,
    ForwardDiagonal,
    Cross,
    Solid,
}

/// Stroke end cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Round,
    Flat,
    Square,
}
