//! Host configuration: clock, display and run length in one JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tsa_core::error::ConfigError;
use tsa_display::DisplayConfig;
use tsa_sim::ClockConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub clock: ClockConfig,
    pub display: DisplayConfig,
    /// Stop after this many clock ticks; `None` runs until shut down.
    pub run_ticks: Option<u64>,
    /// Write each frame to stdout as a JSON line instead of logging a summary.
    pub emit_json: bool,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::from_json(&fs::read_to_string(path)?)
            }
            None => {
                log::info!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
