// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop host for shimmer scenes, built on `winit` and `wgpu`.
//!
//! [`run`] opens a window and drives a
//! [`FrameHandler`](shimmer_core::host::FrameHandler) until the window is
//! closed:
//!
//! - A [`FrameTimer`](shimmer_core::timer::FrameTimer) fires at the configured
//!   cadence. The event loop sleeps with `ControlFlow::WaitUntil` in between
//!   and each fire calls `on_tick`, requesting a redraw when asked to.
//! - Redraws clear a CPU [`PixmapCanvas`](shimmer_render::PixmapCanvas) and
//!   call `on_paint` with the whole window as the damaged region.
//! - The painted canvas is uploaded to a texture and drawn to the window
//!   surface.
//!
//! Paint errors are handled according to [`FramePolicy`]. Ticks, phases, paint
//! errors, fps reports and frame summaries go to the [`TraceSink`] passed to
//! [`run`].
//!
//! [`TraceSink`]: shimmer_core::trace::TraceSink

mod app;
mod clock;
mod config;
mod driver;
mod error;
mod presenter;

pub use clock::timebase;
pub use config::{FramePolicy, HostConfig};
pub use error::HostError;

use shimmer_core::host::FrameHandler;
use shimmer_core::trace::TraceSink;
use shimmer_render::PixmapCanvas;
use winit::event_loop::EventLoop;

use crate::app::App;

/// Opens a window and runs `handler` until the window closes.
///
/// Blocks the calling thread, which must be the main thread on platforms
/// that require it.
///
/// # Errors
///
/// Returns a [`HostError`] if the window or GPU presenter cannot be set up,
/// if presentation fails, or if a paint fails under
/// [`FramePolicy::Exit`].
pub fn run<H, S>(config: HostConfig, handler: H, sink: S) -> Result<(), HostError>
where
    H: FrameHandler<PixmapCanvas>,
    S: TraceSink,
{
    let event_loop = EventLoop::new().map_err(HostError::EventLoop)?;
    let mut app = App::new(config, handler, sink)?;
    event_loop.run_app(&mut app).map_err(HostError::EventLoop)?;
    app.finish()
}
