use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tsa_app::config::AppConfig;
use tsa_app::display_loop::spawn_display_loop;
use tsa_app::input::forward_commands;
use tsa_app::session::DisplaySession;
use tsa_app::sink::{JsonLinesSink, LogSink, PrimitiveSink};
use tsa_core::error::ConfigError;

/// Usage: `tsa-screen [config.json]`
///
/// Display commands may be piped in on stdin, one JSON object per line.
fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(path.as_deref())?;

    let session = DisplaySession::new(&config)?;
    let sink: Box<dyn PrimitiveSink + Send> = if config.emit_json {
        Box::new(JsonLinesSink::new(io::stdout()))
    } else {
        Box::new(LogSink)
    };
    let latest_frame = Arc::new(Mutex::new(None));
    let (cmd_tx, handle) = spawn_display_loop(session, sink, latest_frame, config.run_ticks)?;

    // Piped input ending is the shutdown signal for an unbounded run;
    // a bounded run keeps going until its tick count.
    let shutdown_on_eof = config.run_ticks.is_none();
    let stdin_tx = cmd_tx.clone();
    std::thread::Builder::new()
        .name("tsa-stdin".into())
        .spawn(move || forward_commands(io::stdin().lock(), &stdin_tx, shutdown_on_eof))?;

    if handle.join().is_err() {
        log::error!("display loop panicked");
    }
    Ok(())
}
