// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps a copy of every event
//! in arrival order. Recordings feed [`chrome::export`](crate::chrome::export)
//! or can be inspected directly in tests.

use shimmer_core::trace::{
    FpsEvent, FrameSummary, FrameTickEvent, PaintErrorEvent, PhaseBeginEvent, PhaseEndEvent,
    TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`FrameTickEvent`].
    FrameTick(FrameTickEvent),
    /// A [`PhaseBeginEvent`].
    PhaseBegin(PhaseBeginEvent),
    /// A [`PhaseEndEvent`].
    PhaseEnd(PhaseEndEvent),
    /// A [`PaintErrorEvent`].
    PaintError(PaintErrorEvent),
    /// An [`FpsEvent`].
    Fps(FpsEvent),
    /// A [`FrameSummary`].
    FrameSummary(FrameSummary),
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
    limit: Option<usize>,
}

impl RecorderSink {
    /// Creates an empty, unbounded recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that keeps only the first `limit` events.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: Some(limit),
        }
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Recorded frame summaries, oldest first.
    pub fn summaries(&self) -> impl Iterator<Item = &FrameSummary> {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::FrameSummary(s) => Some(s),
            _ => None,
        })
    }

    fn push(&mut self, event: RecordedEvent) {
        if self.limit.is_some_and(|limit| self.events.len() >= limit) {
            return;
        }
        self.events.push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        self.push(RecordedEvent::FrameTick(*e));
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.push(RecordedEvent::PhaseBegin(*e));
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.push(RecordedEvent::PhaseEnd(*e));
    }

    fn on_paint_error(&mut self, e: &PaintErrorEvent) {
        self.push(RecordedEvent::PaintError(*e));
    }

    fn on_fps(&mut self, e: &FpsEvent) {
        self.push(RecordedEvent::Fps(*e));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.push(RecordedEvent::FrameSummary(*s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fanout;
    use shimmer_core::time::HostTime;
    use shimmer_core::trace::{FrameSummaryBuilder, PhaseKind, Tracer};

    fn tick(i: u64) -> FrameTickEvent {
        FrameTickEvent {
            tick_index: i,
            now: HostTime(i * 16_000_000),
            deadline: HostTime(i * 16_000_000),
            repaint_requested: true,
        }
    }

    #[test]
    fn events_stay_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_frame_tick(&tick(1));
        rec.on_phase_begin(&PhaseBeginEvent {
            frame_index: 0,
            phase: PhaseKind::Paint,
            timestamp: HostTime(10),
        });
        rec.on_phase_end(&PhaseEndEvent {
            frame_index: 0,
            phase: PhaseKind::Paint,
            timestamp: HostTime(20),
        });
        rec.on_frame_summary(&FrameSummaryBuilder::new(0, HostTime(10)).finish());

        let events = rec.events();
        assert_eq!(events.len(), 4, "all events kept");
        assert!(matches!(events[0], RecordedEvent::FrameTick(_)), "tick first");
        assert!(matches!(events[1], RecordedEvent::PhaseBegin(_)), "then begin");
        assert!(matches!(events[2], RecordedEvent::PhaseEnd(_)), "then end");
        assert!(matches!(events[3], RecordedEvent::FrameSummary(_)), "summary last");
        assert_eq!(rec.summaries().count(), 1, "one summary");
    }

    #[test]
    fn limit_drops_later_events() {
        let mut rec = RecorderSink::with_limit(2);
        for i in 0..5 {
            rec.on_frame_tick(&tick(i));
        }
        let indices: Vec<u64> = rec
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::FrameTick(t) => t.tick_index,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(indices, [0, 1], "first two kept");
    }

    #[test]
    fn recorded_through_tracer() {
        let mut rec = RecorderSink::new();
        Tracer::new(&mut rec).frame_tick(&tick(3));
        assert_eq!(rec.events().len(), 1, "tracer forwards with the trace feature");
    }

    #[test]
    fn fanout_feeds_both() {
        let mut both = Fanout(RecorderSink::new(), RecorderSink::new());
        both.on_frame_tick(&tick(1));
        assert_eq!(both.0.events().len(), 1, "first sink");
        assert_eq!(both.1.events().len(), 1, "second sink");
    }
}
