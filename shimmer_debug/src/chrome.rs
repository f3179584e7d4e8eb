// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] takes events from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use shimmer_core::time::Timebase;

use crate::recorder::RecordedEvent;

/// Writes `events` as one JSON array that `chrome://tracing` and
/// [Perfetto](https://ui.perfetto.dev/) can open.
///
/// Phases become `B`/`E` slices and fps reports become a counter track.
/// Everything else is an instant. `ts` is in microseconds of `timebase`.
pub fn export(
    events: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let out: Vec<Value> = events.iter().map(|e| to_json(e, timebase)).collect();
    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn to_json(event: &RecordedEvent, timebase: Timebase) -> Value {
    match event {
        RecordedEvent::FrameTick(e) => json!({
            "ph": "i",
            "name": "Tick",
            "cat": "Timer",
            "ts": ticks_to_us(e.now.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "tick_index": e.tick_index,
                "late_us": ticks_to_us(e.lateness().ticks(), timebase),
                "repaint": e.repaint_requested,
            }
        }),
        RecordedEvent::PhaseBegin(e) => json!({
            "ph": "B",
            "name": e.phase.name(),
            "cat": "Frame",
            "ts": ticks_to_us(e.timestamp.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "args": {
                "frame_index": e.frame_index,
            }
        }),
        RecordedEvent::PhaseEnd(e) => json!({
            "ph": "E",
            "name": e.phase.name(),
            "cat": "Frame",
            "ts": ticks_to_us(e.timestamp.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "args": {
                "frame_index": e.frame_index,
            }
        }),
        RecordedEvent::PaintError(e) => json!({
            "ph": "i",
            "name": "PaintError",
            "cat": "Frame",
            "ts": ticks_to_us(e.timestamp.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "frame_index": e.frame_index,
                "error": e.error.to_string(),
                "fatal": e.fatal,
            }
        }),
        RecordedEvent::Fps(e) => json!({
            "ph": "C",
            "name": "fps",
            "cat": "Summary",
            "ts": ticks_to_us(e.timestamp.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "args": {
                "fps": e.fps,
            }
        }),
        RecordedEvent::FrameSummary(s) => json!({
            "ph": "i",
            "name": "FrameSummary",
            "cat": "Summary",
            "ts": ticks_to_us(s.started.ticks(), timebase),
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "frame_index": s.frame_index,
                "tick_us": ticks_to_us(s.tick_ticks, timebase),
                "paint_us": ticks_to_us(s.paint_ticks, timebase),
                "upload_us": ticks_to_us(s.upload_ticks, timebase),
                "present_us": ticks_to_us(s.present_ticks, timebase),
                "dropped": s.dropped,
            }
        }),
    }
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}
