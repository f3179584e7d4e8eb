// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-independent frame loop state.
//!
//! [`FrameDriver`] owns the handler, the tick timer and the fps counter. The
//! winit app feeds it clock readings and a canvas; everything it decides is
//! reported through a [`Tracer`].

use shimmer_core::canvas::{Canvas, CanvasError};
use shimmer_core::fps::FpsCounter;
use shimmer_core::host::FrameHandler;
use shimmer_core::paint::Color;
use shimmer_core::time::HostTime;
use shimmer_core::timer::FrameTimer;
use shimmer_core::trace::{
    FpsEvent, FrameSummaryBuilder, FrameTickEvent, PaintErrorEvent, PhaseBeginEvent,
    PhaseEndEvent, PhaseKind, Tracer,
};
use shimmer_render::PixmapCanvas;

use crate::clock::{Clock, timebase};
use crate::config::{FramePolicy, HostConfig};

/// Result of one paint attempt.
#[derive(Debug)]
pub(crate) enum PaintOutcome {
    /// The canvas holds a new frame. The summary still needs the upload and
    /// present phases.
    Painted(FrameSummaryBuilder),
    /// The handler failed and the frame was dropped.
    Skipped,
    /// The handler failed and the host should stop.
    Exit(CanvasError),
}

#[derive(Debug)]
pub(crate) struct FrameDriver<H> {
    handler: H,
    timer: FrameTimer,
    fps: FpsCounter,
    policy: FramePolicy,
    clear: Color,
    frame_index: u64,
    /// Begin and end of the last tick, folded into the next frame summary.
    pending_tick: Option<(HostTime, HostTime)>,
}

impl<H: FrameHandler<PixmapCanvas>> FrameDriver<H> {
    pub(crate) fn new(handler: H, config: &HostConfig, now: HostTime) -> Self {
        Self {
            handler,
            timer: FrameTimer::new(config.timer, now),
            fps: FpsCounter::new(now, timebase()),
            policy: config.policy,
            clear: config.clear,
            frame_index: 0,
            pending_tick: None,
        }
    }

    pub(crate) fn next_deadline(&self) -> HostTime {
        self.timer.next_deadline()
    }

    pub(crate) fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[cfg(test)]
    pub(crate) fn handler(&self) -> &H {
        &self.handler
    }

    /// Fires the timer if it is due and forwards the tick to the handler.
    ///
    /// Returns `true` when the handler asked for a repaint.
    pub(crate) fn poll_timer(&mut self, clock: &impl Clock, tracer: &mut Tracer<'_>) -> bool {
        let now = clock.now();
        let deadline = self.timer.next_deadline();
        if !self.timer.poll(now) {
            return false;
        }

        let frame_index = self.frame_index;
        tracer.phase_begin(&PhaseBeginEvent {
            frame_index,
            phase: PhaseKind::Tick,
            timestamp: now,
        });
        let repaint_requested = self.handler.on_tick();
        let end = clock.now();
        tracer.phase_end(&PhaseEndEvent {
            frame_index,
            phase: PhaseKind::Tick,
            timestamp: end,
        });
        tracer.frame_tick(&FrameTickEvent {
            tick_index: self.timer.fired(),
            now,
            deadline,
            repaint_requested,
        });

        self.pending_tick = Some((now, end));
        repaint_requested
    }

    /// Clears `canvas` and asks the handler to paint it.
    ///
    /// On failure the paint error and a dropped frame summary are emitted
    /// here and the policy decides between [`PaintOutcome::Skipped`] and
    /// [`PaintOutcome::Exit`].
    pub(crate) fn paint(
        &mut self,
        canvas: &mut PixmapCanvas,
        clock: &impl Clock,
        tracer: &mut Tracer<'_>,
    ) -> PaintOutcome {
        let frame_index = self.frame_index;
        self.frame_index += 1;

        let start = clock.now();
        let mut summary = FrameSummaryBuilder::new(frame_index, start);
        if let Some((begin, end)) = self.pending_tick.take() {
            summary.phase_begin(PhaseKind::Tick, begin);
            summary.phase_end(PhaseKind::Tick, end);
        }

        tracer.phase_begin(&PhaseBeginEvent {
            frame_index,
            phase: PhaseKind::Paint,
            timestamp: start,
        });
        summary.phase_begin(PhaseKind::Paint, start);

        canvas.clear(self.clear);
        let region = canvas.bounds();
        let result = self.handler.on_paint(canvas, region);

        let end = clock.now();
        tracer.phase_end(&PhaseEndEvent {
            frame_index,
            phase: PhaseKind::Paint,
            timestamp: end,
        });
        summary.phase_end(PhaseKind::Paint, end);

        match result {
            Ok(()) => {
                if let Some(report) = self.fps.frame(end) {
                    tracer.fps(&FpsEvent::new(end, &report));
                }
                PaintOutcome::Painted(summary)
            }
            Err(error) => {
                let fatal = self.policy == FramePolicy::Exit;
                tracer.paint_error(&PaintErrorEvent {
                    frame_index,
                    timestamp: end,
                    error,
                    fatal,
                });
                summary.set_dropped(true);
                tracer.frame_summary(&summary.finish());
                if fatal {
                    PaintOutcome::Exit(error)
                } else {
                    PaintOutcome::Skipped
                }
            }
        }
    }
}

/// Runs `f` as `phase` of a painted frame and records it on both the tracer
/// and the summary.
pub(crate) fn traced_phase<T>(
    phase: PhaseKind,
    summary: &mut FrameSummaryBuilder,
    frame_index: u64,
    clock: &impl Clock,
    tracer: &mut Tracer<'_>,
    f: impl FnOnce() -> T,
) -> T {
    let begin = clock.now();
    tracer.phase_begin(&PhaseBeginEvent {
        frame_index,
        phase,
        timestamp: begin,
    });
    summary.phase_begin(phase, begin);
    let out = f();
    let end = clock.now();
    tracer.phase_end(&PhaseEndEvent {
        frame_index,
        phase,
        timestamp: end,
    });
    summary.phase_end(phase, end);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use kurbo::Rect;
    use shimmer_core::background::Background;
    use shimmer_core::scene::Scene;
    use shimmer_core::trace::FrameSummary;
    use shimmer_debug::recorder::{RecordedEvent, RecorderSink};

    /// Advances by a fixed step on every read.
    struct SteppingClock {
        now: Cell<u64>,
        step: u64,
    }

    impl SteppingClock {
        fn new(start: u64, step: u64) -> Self {
            Self {
                now: Cell::new(start),
                step,
            }
        }

        fn set(&self, t: u64) {
            self.now.set(t);
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> HostTime {
            let t = self.now.get();
            self.now.set(t + self.step);
            HostTime(t)
        }
    }

    /// Paints a solid color or fails, as configured.
    struct Stub {
        fail: bool,
        ticks: u32,
    }

    impl FrameHandler<PixmapCanvas> for Stub {
        fn on_tick(&mut self) -> bool {
            self.ticks += 1;
            true
        }

        fn on_paint(
            &mut self,
            canvas: &mut PixmapCanvas,
            _region: Rect,
        ) -> Result<(), CanvasError> {
            if self.fail {
                return Err(CanvasError::BufferAllocation {
                    width: 200,
                    height: 200,
                });
            }
            canvas.create_buffer(1, 1).map(drop)
        }
    }

    fn driver(fail: bool, policy: FramePolicy) -> FrameDriver<Stub> {
        let config = HostConfig::default().with_policy(policy);
        FrameDriver::new(Stub { fail, ticks: 0 }, &config, HostTime(0))
    }

    fn summaries(rec: &RecorderSink) -> Vec<FrameSummary> {
        rec.summaries().copied().collect()
    }

    #[test]
    fn timer_fires_only_at_the_deadline() {
        let mut d = driver(false, FramePolicy::SkipFrame);
        let clock = SteppingClock::new(15_000_000, 0);
        let mut rec = RecorderSink::new();

        assert!(!d.poll_timer(&clock, &mut Tracer::new(&mut rec)), "early");
        assert!(rec.events().is_empty(), "nothing traced before the deadline");

        clock.set(16_500_000);
        assert!(d.poll_timer(&clock, &mut Tracer::new(&mut rec)), "due");
        assert_eq!(d.handler().ticks, 1, "handler ticked once");
        assert_eq!(d.next_deadline(), HostTime(32_500_000), "re-armed from now");

        let tick = rec.events().iter().find_map(|e| match e {
            RecordedEvent::FrameTick(t) => Some(*t),
            _ => None,
        });
        let tick = tick.expect("tick event");
        assert_eq!(tick.tick_index, 1, "first tick");
        assert_eq!(tick.lateness().ticks(), 500_000, "half a millisecond late");
        assert!(tick.repaint_requested, "stub always repaints");
    }

    #[test]
    fn successful_paint_clears_and_counts() {
        let mut d = driver(false, FramePolicy::SkipFrame);
        let clock = SteppingClock::new(0, 1_000);
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        let mut rec = RecorderSink::new();

        let summary = match d.paint(&mut canvas, &clock, &mut Tracer::new(&mut rec)) {
            PaintOutcome::Painted(summary) => summary.finish(),
            other => panic!("expected a painted frame, got {other:?}"),
        };
        assert_eq!(summary.frame_index, 0, "first frame");
        assert_eq!(summary.paint_ticks, 1_000, "one clock step");
        assert!(!summary.dropped, "not dropped");
        assert_eq!(d.frame_index(), 1, "advanced");
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255, 255]), "cleared to white");
        assert!(summaries(&rec).is_empty(), "summary is left to the presenter");
    }

    #[test]
    fn tick_phase_lands_in_the_next_summary() {
        let mut d = driver(false, FramePolicy::SkipFrame);
        let clock = SteppingClock::new(16_000_000, 250);
        let mut canvas = PixmapCanvas::new(2, 2).unwrap();
        let mut tracer = Tracer::none();

        assert!(d.poll_timer(&clock, &mut tracer), "due");
        let PaintOutcome::Painted(summary) = d.paint(&mut canvas, &clock, &mut tracer) else {
            panic!("expected a painted frame");
        };
        assert_eq!(summary.finish().tick_ticks, 250, "tick duration carried over");
    }

    #[test]
    fn failed_paint_is_skipped_by_default() {
        let mut d = driver(true, FramePolicy::SkipFrame);
        let clock = SteppingClock::new(0, 10);
        let mut canvas = PixmapCanvas::new(2, 2).unwrap();
        let mut rec = RecorderSink::new();

        let outcome = d.paint(&mut canvas, &clock, &mut Tracer::new(&mut rec));
        assert!(matches!(outcome, PaintOutcome::Skipped), "got {outcome:?}");

        let error = rec.events().iter().find_map(|e| match e {
            RecordedEvent::PaintError(p) => Some(*p),
            _ => None,
        });
        let error = error.expect("paint error event");
        assert!(!error.fatal, "skipping is not fatal");
        assert_eq!(
            error.error,
            CanvasError::BufferAllocation {
                width: 200,
                height: 200
            },
            "error passed through unchanged"
        );

        let summaries = summaries(&rec);
        assert_eq!(summaries.len(), 1, "dropped frames are summarized here");
        assert!(summaries[0].dropped, "marked dropped");
        assert_eq!(d.frame_index(), 1, "index still advances");
    }

    #[test]
    fn exit_policy_returns_the_error() {
        let mut d = driver(true, FramePolicy::Exit);
        let clock = SteppingClock::new(0, 10);
        let mut canvas = PixmapCanvas::new(2, 2).unwrap();
        let mut rec = RecorderSink::new();

        let outcome = d.paint(&mut canvas, &clock, &mut Tracer::new(&mut rec));
        assert!(
            matches!(outcome, PaintOutcome::Exit(CanvasError::BufferAllocation { .. })),
            "got {outcome:?}"
        );
        assert!(
            rec.events()
                .iter()
                .any(|e| matches!(e, RecordedEvent::PaintError(p) if p.fatal)),
            "fatal error reported"
        );
    }

    #[test]
    fn fps_reported_after_the_window() {
        let mut d = driver(false, FramePolicy::SkipFrame);
        // 100 ms per clock read: paint start and end each take one read.
        let clock = SteppingClock::new(0, 100_000_000);
        let mut canvas = PixmapCanvas::new(2, 2).unwrap();
        let mut rec = RecorderSink::new();

        for _ in 0..12 {
            let _ = d.paint(&mut canvas, &clock, &mut Tracer::new(&mut rec));
        }
        let reports: Vec<_> = rec
            .events()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Fps(f) => Some(*f),
                _ => None,
            })
            .collect();
        assert_eq!(reports.len(), 1, "one report in 2.3 s of frames");
        assert_eq!(reports[0].frames, 11, "frames counted until past 2 s");
    }

    #[test]
    fn traced_phase_records_both_sides() {
        let clock = SteppingClock::new(100, 5);
        let mut summary = FrameSummaryBuilder::new(3, HostTime(100));
        let mut rec = RecorderSink::new();

        let value = traced_phase(
            PhaseKind::Upload,
            &mut summary,
            3,
            &clock,
            &mut Tracer::new(&mut rec),
            || 42,
        );
        assert_eq!(value, 42, "closure result returned");
        assert_eq!(summary.finish().upload_ticks, 5, "one clock step");
        assert!(
            matches!(rec.events(), [RecordedEvent::PhaseBegin(_), RecordedEvent::PhaseEnd(_)]),
            "begin then end"
        );
    }

    #[test]
    fn drives_a_scene() {
        let scene: Scene<PixmapCanvas> = Scene::new(Background::default());
        let config = HostConfig::default();
        let mut d = FrameDriver::new(scene, &config, HostTime(0));
        let clock = SteppingClock::new(0, 1);
        let mut canvas = PixmapCanvas::new(64, 64).unwrap();

        for _ in 0..3 {
            let _ = d.paint(&mut canvas, &clock, &mut Tracer::none());
        }
        assert_eq!(d.handler().frame_count(), 3, "three paints");
    }
}
