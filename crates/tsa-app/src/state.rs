//! Types shared between the host and the display-loop thread.

use std::sync::{Arc, Mutex};

use tsa_core::commands::DisplayCommand;
use tsa_core::primitives::DrawPrimitive;
use tsa_core::state::SimulationState;

/// Commands sent from the host to the display-loop thread.
#[derive(Debug)]
pub enum DisplayLoopCommand {
    /// A display command, applied at the next frame boundary.
    Display(DisplayCommand),
    /// Shut down the display loop gracefully.
    Shutdown,
}

/// One rendered frame: the snapshot it was built from and its draw list.
#[derive(Debug, Clone)]
pub struct Frame {
    pub state: Arc<SimulationState>,
    pub primitives: Vec<DrawPrimitive>,
}

/// Latest frame, shared with the display loop for synchronous polling.
pub type SharedFrame = Arc<Mutex<Option<Frame>>>;
