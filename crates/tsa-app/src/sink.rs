//! Where finished frames go.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use tsa_core::primitives::DrawPrimitive;
use tsa_core::state::SimulationState;

use crate::state::Frame;

/// Receives each frame's primitives in paint order.
pub trait PrimitiveSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Logs a one-line summary per frame.
#[derive(Debug, Default)]
pub struct LogSink;

impl PrimitiveSink for LogSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for p in &frame.primitives {
            *counts.entry(p.name()).or_default() += 1;
        }
        log::info!(
            "frame tick={} primitives={} {:?}",
            frame.state.tick,
            frame.primitives.len(),
            counts
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    state: &'a SimulationState,
    primitives: &'a [DrawPrimitive],
}

/// Writes each frame as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PrimitiveSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let record = FrameRecord {
            state: &frame.state,
            primitives: &frame.primitives,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

/// Collects frames in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

impl PrimitiveSink for RecordingSink {
    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
