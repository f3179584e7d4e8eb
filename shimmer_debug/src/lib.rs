// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for shimmer frame
//! loops.
//!
//! This crate provides [`TraceSink`](shimmer_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] writes one human-readable line per event.
//! - [`recorder::RecorderSink`] keeps every event in memory.
//! - [`chrome::export`] turns a recording into Chrome Trace Event Format
//!   JSON.
//! - [`Fanout`] forwards each event to two sinks.

pub mod chrome;
pub mod pretty;
pub mod recorder;

use shimmer_core::trace::{
    FpsEvent, FrameSummary, FrameTickEvent, PaintErrorEvent, PhaseBeginEvent, PhaseEndEvent,
    TraceSink,
};

/// Forwards every event to both `A` and `B`, in that order.
#[derive(Debug, Default)]
pub struct Fanout<A, B>(pub A, pub B);

impl<A: TraceSink, B: TraceSink> TraceSink for Fanout<A, B> {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        self.0.on_frame_tick(e);
        self.1.on_frame_tick(e);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.0.on_phase_begin(e);
        self.1.on_phase_begin(e);
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.0.on_phase_end(e);
        self.1.on_phase_end(e);
    }

    fn on_paint_error(&mut self, e: &PaintErrorEvent) {
        self.0.on_paint_error(e);
        self.1.on_paint_error(e);
    }

    fn on_fps(&mut self, e: &FpsEvent) {
        self.0.on_fps(e);
        self.1.on_fps(e);
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.0.on_frame_summary(s);
        self.1.on_frame_summary(s);
    }
}
