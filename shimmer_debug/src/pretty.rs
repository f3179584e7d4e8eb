// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use shimmer_core::time::{HostTime, Timebase};
use shimmer_core::trace::{
    FpsEvent, FrameSummary, FrameTickEvent, PaintErrorEvent, PhaseBeginEvent, PhaseEndEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
    phases: bool,
    frames: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .field("phases", &self.phases)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self::with_writer(Box::new(std::io::stderr()), timebase)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self {
            writer,
            timebase,
            phases: true,
            frames: true,
        }
    }

    /// Turns per-phase begin/end lines on or off.
    #[must_use]
    pub fn with_phases(mut self, phases: bool) -> Self {
        self.phases = phases;
        self
    }

    /// Turns per-frame lines (ticks, phases, summaries) on or off. With
    /// both off only errors and fps reports are written.
    #[must_use]
    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        if !self.frames {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[tick] #{} now={:.1}µs late={:.1}µs repaint={}",
            e.tick_index,
            self.host_us(e.now),
            self.ticks_to_us(e.lateness().ticks()),
            e.repaint_requested,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        if !(self.phases && self.frames) {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[phase:begin] frame={} {} at {:.1}µs",
            e.frame_index,
            e.phase.name(),
            self.host_us(e.timestamp),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        if !(self.phases && self.frames) {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[phase:end] frame={} {} at {:.1}µs",
            e.frame_index,
            e.phase.name(),
            self.host_us(e.timestamp),
        );
    }

    fn on_paint_error(&mut self, e: &PaintErrorEvent) {
        let action = if e.fatal { "exiting" } else { "frame skipped" };
        let _ = writeln!(
            self.writer,
            "[error] frame={} {} ({action})",
            e.frame_index, e.error,
        );
    }

    fn on_fps(&mut self, e: &FpsEvent) {
        let _ = writeln!(
            self.writer,
            "[fps] {:.2} ({} frames in {:.3}s)",
            e.fps,
            e.frames,
            e.elapsed.as_secs_f64(self.timebase),
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        if !self.frames {
            return;
        }
        let status = if s.dropped { "DROPPED" } else { "ok" };
        let _ = writeln!(
            self.writer,
            "[summary] frame={} paint={:.1}µs upload={:.1}µs present={:.1}µs {status}",
            s.frame_index,
            self.ticks_to_us(s.paint_ticks),
            self.ticks_to_us(s.upload_ticks),
            self.ticks_to_us(s.present_ticks),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shimmer_core::canvas::CanvasError;
    use shimmer_core::time::Duration;
    use shimmer_core::trace::{FrameSummaryBuilder, PhaseKind};

    fn sink() -> PrettyPrintSink<Vec<u8>> {
        PrettyPrintSink::with_writer(Vec::new(), Timebase::NANOS)
    }

    #[test]
    fn tick_line_shows_lateness() {
        let mut sink = sink();
        sink.on_frame_tick(&FrameTickEvent {
            tick_index: 1,
            now: HostTime(16_250_000),
            deadline: HostTime(16_000_000),
            repaint_requested: true,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("[tick] #1"), "got: {output}");
        assert!(output.contains("late=250.0µs"), "got: {output}");
    }

    #[test]
    fn paint_error_line() {
        let mut sink = sink();
        sink.on_paint_error(&PaintErrorEvent {
            frame_index: 9,
            timestamp: HostTime(0),
            error: CanvasError::BufferAllocation {
                width: 200,
                height: 200,
            },
            fatal: false,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("200x200"), "got: {output}");
        assert!(output.contains("frame skipped"), "got: {output}");
    }

    #[test]
    fn fps_line() {
        let mut sink = sink();
        sink.on_fps(&FpsEvent {
            timestamp: HostTime(0),
            frames: 125,
            elapsed: Duration(2_000_000_000),
            fps: 62.5,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[fps] 62.50 (125 frames in 2.000s)\n", "exact line");
    }

    #[test]
    fn phases_can_be_muted() {
        let mut sink = sink().with_phases(false);
        sink.on_phase_begin(&PhaseBeginEvent {
            frame_index: 0,
            phase: PhaseKind::Paint,
            timestamp: HostTime(0),
        });
        sink.on_frame_summary(&FrameSummaryBuilder::new(0, HostTime(0)).finish());
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(!output.contains("[phase"), "got: {output}");
        assert!(output.contains("[summary] frame=0"), "got: {output}");
    }

    #[test]
    fn frame_lines_can_be_muted() {
        let mut sink = sink().with_frames(false);
        sink.on_frame_tick(&FrameTickEvent {
            tick_index: 1,
            now: HostTime(0),
            deadline: HostTime(0),
            repaint_requested: true,
        });
        sink.on_frame_summary(&FrameSummaryBuilder::new(0, HostTime(0)).finish());
        sink.on_fps(&FpsEvent {
            timestamp: HostTime(0),
            frames: 120,
            elapsed: Duration(2_000_000_000),
            fps: 60.0,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[fps] 60.00 (120 frames in 2.000s)\n", "only the report");
    }
}
