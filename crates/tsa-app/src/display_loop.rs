//! Display loop thread: ticks the clock on its interval, renders each
//! snapshot and hands the frame to a sink.
//!
//! The session is moved into the thread, which owns it from then on.
//! Commands arrive via `mpsc` channel and are applied while the loop
//! waits between frames. The latest frame is also stored in shared
//! state for synchronous polling.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Instant;

use crate::session::DisplaySession;
use crate::sink::PrimitiveSink;
use crate::state::{DisplayLoopCommand, Frame, SharedFrame};

/// Spawns the display loop in a new thread.
///
/// Returns the command sender for the host and the thread handle.
pub fn spawn_display_loop(
    session: DisplaySession,
    mut sink: Box<dyn PrimitiveSink + Send>,
    latest_frame: SharedFrame,
    run_ticks: Option<u64>,
) -> io::Result<(mpsc::Sender<DisplayLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<DisplayLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tsa-display-loop".into())
        .spawn(move || {
            run_display_loop(session, cmd_rx, &latest_frame, sink.as_mut(), run_ticks);
        })?;

    Ok((cmd_tx, handle))
}

/// The display loop. Runs until `run_ticks` clock ticks have been
/// rendered, a Shutdown command arrives or the channel disconnects.
/// Returns the session so callers can inspect its final state.
pub fn run_display_loop(
    mut session: DisplaySession,
    cmd_rx: mpsc::Receiver<DisplayLoopCommand>,
    latest_frame: &SharedFrame,
    sink: &mut dyn PrimitiveSink,
    run_ticks: Option<u64>,
) -> DisplaySession {
    log::info!(
        "display loop started: interval {} ms, run_ticks {:?}",
        session.clock().interval_ms(),
        run_ticks
    );
    publish(session.redraw(), latest_frame, sink);

    let mut next_frame_time = Instant::now();
    loop {
        let interval = session.clock().interval();
        next_frame_time += interval;

        // 1. Apply commands until the next frame is due
        if !wait_for_frame(&cmd_rx, &mut session, next_frame_time) {
            log::info!("display loop shutting down");
            return session;
        }

        // 2. Advance one tick (the clock holds its snapshot while stopped)
        let frame = session.step();
        let tick = frame.state.tick;

        // 3. Hand off and store for polling
        publish(frame, latest_frame, sink);

        if run_ticks.is_some_and(|limit| tick >= limit) {
            log::info!("display loop finished after {tick} ticks");
            return session;
        }

        // Too far behind: reset to avoid a catch-up spiral
        let now = Instant::now();
        if now > next_frame_time && now - next_frame_time > interval * 2 {
            next_frame_time = now;
        }
    }
}

/// Apply incoming commands until `deadline`. Returns false when the loop
/// should stop.
fn wait_for_frame(
    cmd_rx: &mpsc::Receiver<DisplayLoopCommand>,
    session: &mut DisplaySession,
    deadline: Instant,
) -> bool {
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match cmd_rx.recv_timeout(timeout) {
            Ok(DisplayLoopCommand::Display(cmd)) => session.apply(cmd),
            Ok(DisplayLoopCommand::Shutdown) => return false,
            Err(RecvTimeoutError::Timeout) => return true,
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }
}

fn publish(frame: Frame, latest_frame: &SharedFrame, sink: &mut dyn PrimitiveSink) {
    if let Err(err) = sink.present(&frame) {
        log::warn!("sink failed on tick {}: {err}", frame.state.tick);
    }
    if let Ok(mut lock) = latest_frame.lock() {
        *lock = Some(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use test_log::test;

    use tsa_core::commands::DisplayCommand;
    use tsa_core::enums::VectorKind;
    use tsa_core::types::{Point2D, Rect, TacticalVector};

    use crate::config::AppConfig;
    use crate::sink::RecordingSink;

    fn fast_session() -> DisplaySession {
        let mut config = AppConfig::default();
        config.clock.interval_ms = 1;
        DisplaySession::new(&config).unwrap()
    }

    fn shared() -> SharedFrame {
        Arc::new(Mutex::new(None))
    }

    fn triangles(frame: &Frame) -> usize {
        frame.primitives.iter().filter(|p| p.name() == "triangle").count()
    }

    #[test]
    fn test_wait_applies_commands_until_shutdown() {
        let (tx, rx) = mpsc::channel();
        tx.send(DisplayLoopCommand::Display(DisplayCommand::SetInterval { ms: 500 }))
            .unwrap();
        tx.send(DisplayLoopCommand::Display(DisplayCommand::Stop)).unwrap();
        tx.send(DisplayLoopCommand::Shutdown).unwrap();

        let mut session = fast_session();
        // A far deadline: only the Shutdown can end the wait.
        let deadline = Instant::now() + Duration::from_secs(60);
        assert!(!wait_for_frame(&rx, &mut session, deadline));
        assert_eq!(session.clock().interval_ms(), 500);
        assert!(!session.clock().is_running());
    }

    #[test]
    fn test_wait_returns_at_deadline() {
        let (tx, rx) = mpsc::channel();
        let mut session = fast_session();

        assert!(wait_for_frame(&rx, &mut session, Instant::now()));

        // Commands already queued are still applied before the frame.
        tx.send(DisplayLoopCommand::Display(DisplayCommand::SetInterval { ms: 40 }))
            .unwrap();
        assert!(wait_for_frame(&rx, &mut session, Instant::now() + Duration::from_millis(5)));
        assert_eq!(session.clock().interval_ms(), 40);

        drop(tx);
        assert!(!wait_for_frame(&rx, &mut session, Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_runs_configured_ticks() {
        let (_tx, rx) = mpsc::channel();
        let latest = shared();
        let mut sink = RecordingSink::default();

        let session = run_display_loop(fast_session(), rx, &latest, &mut sink, Some(3));

        let ticks: Vec<u64> = sink.frames.iter().map(|f| f.state.tick).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);
        assert_eq!(session.clock().snapshot().tick, 3);
        assert_eq!(latest.lock().unwrap().as_ref().unwrap().state.tick, 3);
    }

    #[test]
    fn test_shutdown_after_initial_frame() {
        let (tx, rx) = mpsc::channel();
        tx.send(DisplayLoopCommand::Shutdown).unwrap();
        let mut sink = RecordingSink::default();

        run_display_loop(fast_session(), rx, &shared(), &mut sink, None);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].state.tick, 0);
    }

    #[test]
    fn test_disconnect_ends_loop() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let mut sink = RecordingSink::default();

        run_display_loop(fast_session(), rx, &shared(), &mut sink, None);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_commands_apply_between_frames() {
        let (tx, rx) = mpsc::channel();
        // Hold both ships still so no bearing-rate indicator appears.
        for cmd in [
            DisplayCommand::SetOwnShip { course: 0.0, speed: 0.0 },
            DisplayCommand::SetTarget { course: 90.0, speed: 0.0 },
        ] {
            tx.send(DisplayLoopCommand::Display(cmd)).unwrap();
        }
        let vector = TacticalVector::new(Point2D::ZERO, 45.0, 1.0, VectorKind::CollisionAvoidance);
        tx.send(DisplayLoopCommand::Display(DisplayCommand::AddVector { vector }))
            .unwrap();
        // Degenerate bounds are rejected without stopping the loop.
        tx.send(DisplayLoopCommand::Display(DisplayCommand::SetWorldBounds {
            bounds: Rect::new(1.0, 1.0, 1.0, 1.0),
        }))
        .unwrap();
        let mut sink = RecordingSink::default();

        let session = run_display_loop(fast_session(), rx, &shared(), &mut sink, Some(1));

        assert_eq!(sink.frames.len(), 2);
        assert_eq!(triangles(&sink.frames[0]), 3);
        assert_eq!(triangles(&sink.frames[1]), 4);
        assert_eq!(
            session.renderer().transform().world_bounds(),
            Rect::new(-10.0, -10.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_spawned_loop_publishes_frames() {
        let latest = shared();
        let (tx, handle) = spawn_display_loop(
            fast_session(),
            Box::new(RecordingSink::default()),
            Arc::clone(&latest),
            Some(2),
        )
        .unwrap();

        handle.join().unwrap();
        drop(tx);
        assert_eq!(latest.lock().unwrap().as_ref().unwrap().state.tick, 2);
    }
}
