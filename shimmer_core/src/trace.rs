// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! Hosts report what happens on each timer tick and each repaint through a
//! [`TraceSink`]. Every sink method defaults to a no-op, so a sink only
//! overrides the events it wants.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. Without the `trace`
//! feature its methods are empty after optimization; with it, each costs one
//! `Option` check before dispatching.
//!
//! [`FrameSummaryBuilder`] collects phase timestamps during a repaint and
//! produces a [`FrameSummary`] at the end.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies.

use crate::canvas::CanvasError;
use crate::fps::FpsReport;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// A timed section of the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Timer tick handling.
    Tick,
    /// Scene painting into the canvas.
    Paint,
    /// Copying the painted canvas to the GPU.
    Upload,
    /// Drawing and presenting the swapchain image.
    Present,
}

impl PhaseKind {
    /// All phases, in frame order.
    pub const ALL: [Self; 4] = [Self::Tick, Self::Paint, Self::Upload, Self::Present];

    /// Short lowercase name, for log lines and trace exports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Paint => "paint",
            Self::Upload => "upload",
            Self::Present => "present",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Tick => 0,
            Self::Paint => 1,
            Self::Upload => 2,
            Self::Present => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Emitted when the host's frame timer fires.
#[derive(Clone, Copy, Debug)]
pub struct FrameTickEvent {
    /// Number of timer ticks fired so far, including this one.
    pub tick_index: u64,
    /// Host time when the tick was handled.
    pub now: HostTime,
    /// When the tick was due.
    pub deadline: HostTime,
    /// Whether the handler asked for a repaint.
    pub repaint_requested: bool,
}

impl FrameTickEvent {
    /// How late the tick was handled.
    #[must_use]
    pub const fn lateness(&self) -> Duration {
        self.now.saturating_duration_since(self.deadline)
    }
}

/// A phase started.
#[derive(Clone, Copy, Debug)]
pub struct PhaseBeginEvent {
    /// Index of the repaint the phase belongs to.
    pub frame_index: u64,
    /// The phase.
    pub phase: PhaseKind,
    /// When it started.
    pub timestamp: HostTime,
}

/// A phase finished.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEndEvent {
    /// Index of the repaint the phase belongs to.
    pub frame_index: u64,
    /// The phase.
    pub phase: PhaseKind,
    /// When it finished.
    pub timestamp: HostTime,
}

/// Emitted when painting a frame fails.
#[derive(Clone, Copy, Debug)]
pub struct PaintErrorEvent {
    /// Index of the failed repaint.
    pub frame_index: u64,
    /// Host time of the failure.
    pub timestamp: HostTime,
    /// What went wrong.
    pub error: CanvasError,
    /// Whether the host stops after this error instead of skipping the
    /// frame.
    pub fatal: bool,
}

/// Emitted once per frame-rate reporting window.
#[derive(Clone, Copy, Debug)]
pub struct FpsEvent {
    /// Host time at the end of the window.
    pub timestamp: HostTime,
    /// Frames painted in the window.
    pub frames: u64,
    /// Window length.
    pub elapsed: Duration,
    /// Average frames per second.
    pub fps: f64,
}

impl FpsEvent {
    /// Creates an event from a counter report.
    #[must_use]
    pub const fn new(timestamp: HostTime, report: &FpsReport) -> Self {
        Self {
            timestamp,
            frames: report.frames,
            elapsed: report.elapsed,
            fps: report.fps,
        }
    }
}

/// Phase durations of one repaint, from a [`FrameSummaryBuilder`].
#[derive(Clone, Copy, Debug)]
pub struct FrameSummary {
    /// Index of the repaint.
    pub frame_index: u64,
    /// Host time when the repaint started.
    pub started: HostTime,
    /// Tick phase duration in ticks (0 if not measured).
    pub tick_ticks: u64,
    /// Paint phase duration in ticks (0 if not measured).
    pub paint_ticks: u64,
    /// Upload phase duration in ticks (0 if not measured).
    pub upload_ticks: u64,
    /// Present phase duration in ticks (0 if not measured).
    pub present_ticks: u64,
    /// Whether the frame was dropped after a paint error.
    pub dropped: bool,
}

impl FrameSummary {
    /// Sum of all measured phase durations.
    #[must_use]
    pub const fn total_ticks(&self) -> u64 {
        self.tick_ticks + self.paint_ticks + self.upload_ticks + self.present_ticks
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Destination for frame-loop events.
///
/// Every method does nothing by default; implement only the ones you need.
pub trait TraceSink {
    /// The frame timer fired.
    fn on_frame_tick(&mut self, e: &FrameTickEvent) {
        _ = e;
    }

    /// A phase started.
    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        _ = e;
    }

    /// A phase finished.
    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        _ = e;
    }

    /// A paint failed.
    fn on_paint_error(&mut self, e: &PaintErrorEvent) {
        _ = e;
    }

    /// A frame-rate window closed.
    fn on_fps(&mut self, e: &FpsEvent) {
        _ = e;
    }

    /// A repaint finished, successfully or not.
    fn on_frame_summary(&mut self, s: &FrameSummary) {
        _ = s;
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer
// ---------------------------------------------------------------------------

/// Borrowed handle to an optional [`TraceSink`], passed down the frame loop.
///
/// Each method tests `cfg!(feature = "trace")` first, so without the feature
/// the whole body is dead code and the optimizer drops it.
pub struct Tracer<'a> {
    sink: Option<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("attached", &self.sink.is_some())
            .finish()
    }
}

/// Generates a `Tracer` method that forwards one event to the sink.
macro_rules! forward {
    ($(#[$meta:meta])* $name:ident => $sink_method:ident($ty:ty)) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            if !cfg!(feature = "trace") {
                return;
            }
            if let Some(sink) = self.sink.as_deref_mut() {
                sink.$sink_method(e);
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Sends events to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self { sink: Some(sink) }
    }

    /// Sends events nowhere.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self { sink: None }
    }

    forward!(
        /// Forwards a [`FrameTickEvent`].
        frame_tick => on_frame_tick(FrameTickEvent)
    );
    forward!(
        /// Forwards a [`PhaseBeginEvent`].
        phase_begin => on_phase_begin(PhaseBeginEvent)
    );
    forward!(
        /// Forwards a [`PhaseEndEvent`].
        phase_end => on_phase_end(PhaseEndEvent)
    );
    forward!(
        /// Forwards a [`PaintErrorEvent`].
        paint_error => on_paint_error(PaintErrorEvent)
    );
    forward!(
        /// Forwards an [`FpsEvent`].
        fps => on_fps(FpsEvent)
    );
    forward!(
        /// Forwards a [`FrameSummary`].
        frame_summary => on_frame_summary(FrameSummary)
    );
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Start and end of one phase, either of which may be missing.
#[derive(Clone, Copy, Debug, Default)]
struct Span {
    begin: Option<HostTime>,
    end: Option<HostTime>,
}

impl Span {
    fn ticks(self) -> u64 {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => end.saturating_duration_since(begin).ticks(),
            _ => 0,
        }
    }
}

/// Accumulates phase spans over one repaint and turns them into a
/// [`FrameSummary`].
#[derive(Debug)]
pub struct FrameSummaryBuilder {
    frame_index: u64,
    started: HostTime,
    spans: [Span; PhaseKind::ALL.len()],
    dropped: bool,
}

impl FrameSummaryBuilder {
    /// Starts a summary for repaint `frame_index`, begun at `started`.
    #[must_use]
    pub fn new(frame_index: u64, started: HostTime) -> Self {
        Self {
            frame_index,
            started,
            spans: [Span::default(); PhaseKind::ALL.len()],
            dropped: false,
        }
    }

    /// Notes that `phase` began at `t`.
    pub fn phase_begin(&mut self, phase: PhaseKind, t: HostTime) {
        self.spans[phase.index()].begin = Some(t);
    }

    /// Notes that `phase` ended at `t`.
    pub fn phase_end(&mut self, phase: PhaseKind, t: HostTime) {
        self.spans[phase.index()].end = Some(t);
    }

    /// Marks the frame as dropped (or not).
    pub fn set_dropped(&mut self, dropped: bool) {
        self.dropped = dropped;
    }

    /// The finished summary. Phases missing either end count as zero.
    #[must_use]
    pub fn finish(self) -> FrameSummary {
        let ticks = |phase: PhaseKind| self.spans[phase.index()].ticks();
        FrameSummary {
            frame_index: self.frame_index,
            started: self.started,
            tick_ticks: ticks(PhaseKind::Tick),
            paint_ticks: ticks(PhaseKind::Paint),
            upload_ticks: ticks(PhaseKind::Upload),
            present_ticks: ticks(PhaseKind::Present),
            dropped: self.dropped,
        }
    }
}
