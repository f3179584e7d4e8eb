// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless frame loop that exercises the tracing and diagnostics pipeline.
//!
//! Paints 300 frames of the layered scene into an offscreen
//! [`PixmapCanvas`] on a simulated 60 Hz timer. Events go to both a
//! [`PrettyPrintSink`] on stdout and a [`RecorderSink`]; the recording is
//! exported as Chrome trace JSON and the last frame is saved as a PNG.
//!
//! Host time is simulated, but paint phases take as long as the real
//! rasterization did.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use shimmer_core::background::Background;
use shimmer_core::canvas::Canvas;
use shimmer_core::fps::FpsCounter;
use shimmer_core::host::FrameHandler;
use shimmer_core::layer::{SpriteConfig, SpriteLayer};
use shimmer_core::paint::Color;
use shimmer_core::scene::Scene;
use shimmer_core::time::{Duration, HostTime, Timebase};
use shimmer_core::timer::{FrameTimer, TimerConfig};
use shimmer_core::trace::{
    FpsEvent, FrameSummaryBuilder, FrameTickEvent, PaintErrorEvent, PhaseBeginEvent,
    PhaseEndEvent, PhaseKind, Tracer,
};
use shimmer_debug::Fanout;
use shimmer_debug::chrome;
use shimmer_debug::pretty::PrettyPrintSink;
use shimmer_debug::recorder::RecorderSink;
use shimmer_render::PixmapCanvas;

const FRAME_COUNT: u64 = 300;
const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const TRACE_PATH: &str = "shimmer_trace.json";
const FRAME_PATH: &str = "shimmer_last_frame.png";

fn main() -> anyhow::Result<()> {
    let timebase = Timebase::NANOS;

    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::with_writer(std::io::stdout(), timebase).with_phases(false);
    let mut sinks = Fanout(pretty, RecorderSink::new());

    // -- scene -------------------------------------------------------------
    let mut scene: Scene<PixmapCanvas> = Scene::new(Background::default())
        .with_layer(SpriteLayer::new(SpriteConfig::DEFAULT));
    let mut canvas = PixmapCanvas::new(WIDTH, HEIGHT)?;
    let white = Color::rgb(1.0, 1.0, 1.0);

    // -- simulated loop ----------------------------------------------------
    let start = HostTime(1_000_000_000); // start at 1s
    let mut timer = FrameTimer::new(TimerConfig::sixty_hz(), start);
    let mut fps = FpsCounter::new(start, timebase);

    for frame_index in 0..FRAME_COUNT {
        let mut tracer = Tracer::new(&mut sinks);

        // 1. Wake exactly on the deadline and tick.
        let now = timer.next_deadline();
        let fired = timer.poll(now);
        debug_assert!(fired, "polled on the deadline");
        let repaint_requested = scene.on_tick();
        tracer.frame_tick(&FrameTickEvent {
            tick_index: timer.fired(),
            now,
            deadline: now,
            repaint_requested,
        });
        if !repaint_requested {
            continue;
        }

        // 2. Paint, timed against the wall clock.
        let mut summary = FrameSummaryBuilder::new(frame_index, now);
        tracer.phase_begin(&PhaseBeginEvent {
            frame_index,
            phase: PhaseKind::Paint,
            timestamp: now,
        });
        summary.phase_begin(PhaseKind::Paint, now);

        let wall = Instant::now();
        canvas.clear(white);
        let region = canvas.bounds();
        let result = scene.on_paint(&mut canvas, region);
        let paint_nanos = u64::try_from(wall.elapsed().as_nanos()).unwrap_or(u64::MAX);
        let end = now.saturating_add(Duration(timebase.nanos_to_ticks(paint_nanos)));

        tracer.phase_end(&PhaseEndEvent {
            frame_index,
            phase: PhaseKind::Paint,
            timestamp: end,
        });
        summary.phase_end(PhaseKind::Paint, end);

        // 3. Report.
        if let Err(error) = result {
            tracer.paint_error(&PaintErrorEvent {
                frame_index,
                timestamp: end,
                error,
                fatal: false,
            });
            summary.set_dropped(true);
        } else if let Some(report) = fps.frame(end) {
            tracer.fps(&FpsEvent::new(end, &report));
        }
        tracer.frame_summary(&summary.finish());
    }

    // -- output ------------------------------------------------------------
    let Fanout(_, recorder) = sinks;
    println!(
        "\n{} events recorded over {} frames",
        recorder.events().len(),
        scene.frame_count()
    );

    let mut writer = BufWriter::new(File::create(TRACE_PATH)?);
    chrome::export(recorder.events(), timebase, &mut writer)?;
    println!("Chrome trace written to {TRACE_PATH}");

    canvas.pixmap().save_png(FRAME_PATH)?;
    println!("last frame written to {FRAME_PATH}");

    Ok(())
}
