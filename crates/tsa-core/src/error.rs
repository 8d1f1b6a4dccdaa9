//! Configuration errors.

use thiserror::Error;

/// Errors raised while configuring the display.
///
/// Geometry operations never fail; only configuration can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world bounds must have non-zero area (width {width}, height {height})")]
    DegenerateWorldBounds { width: f64, height: f64 },

    #[error("world bounds give an unusable scale ({scale_x}, {scale_y})")]
    InvalidScale { scale_x: f64, scale_y: f64 },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
