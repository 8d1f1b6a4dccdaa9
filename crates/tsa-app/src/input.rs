//! Host commands read as JSON lines.

use std::io::BufRead;
use std::sync::mpsc;

use tsa_core::commands::DisplayCommand;

use crate::state::DisplayLoopCommand;

/// Forward one `DisplayCommand` per JSON line until EOF.
///
/// Blank lines are skipped and malformed ones logged. At EOF a Shutdown
/// is sent when `shutdown_on_eof` is set. Returns early if the display
/// loop has gone away.
pub fn forward_commands<R: BufRead>(
    reader: R,
    cmd_tx: &mpsc::Sender<DisplayLoopCommand>,
    shutdown_on_eof: bool,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("command input closed: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<DisplayCommand>(&line) {
            Ok(cmd) => {
                if cmd_tx.send(DisplayLoopCommand::Display(cmd)).is_err() {
                    return;
                }
            }
            Err(err) => log::warn!("ignoring command {line:?}: {err}"),
        }
    }

    if shutdown_on_eof {
        log::info!("command input ended, shutting down");
        let _ = cmd_tx.send(DisplayLoopCommand::Shutdown);
    }
}
