// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for window-system integrations.
//!
//! A host (see `shimmer_backend_winit`) owns everything platform-specific:
//!
//! - **Tick source**: a fixed-cadence timer, usually driven by a
//!   [`FrameTimer`](crate::timer::FrameTimer). Each expiry calls
//!   [`FrameHandler::on_tick`].
//!
//! - **Paint source**: whatever the windowing system uses to ask for a
//!   redraw. Each request calls [`FrameHandler::on_paint`] with a
//!   [`Canvas`] covering the window and the damaged region.
//!
//! - **Presentation**: getting the painted canvas onto the screen.
//!
//! The core owns only state transitions. It never reads a clock, never
//! blocks and never schedules anything itself.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_timer(now: HostTime) {
//!     if timer.poll(now) && handler.on_tick() {
//!         window.request_redraw();
//!     }
//! }
//!
//! fn on_redraw(region: Rect) {
//!     match handler.on_paint(&mut canvas, region) {
//!         Ok(()) => present(&canvas),
//!         Err(e) => policy.handle(e), // skip the frame or exit
//!     }
//! }
//! ```

use kurbo::Rect;

use crate::canvas::{Canvas, CanvasError};

/// Receives timer and paint callbacks from a host.
pub trait FrameHandler<C: Canvas> {
    /// Called each time the host's timer fires.
    ///
    /// Returns `true` when the host should request a repaint.
    fn on_tick(&mut self) -> bool;

    /// Called when the host repaints. `region` is the damaged area; handlers
    /// may ignore it and redraw the whole canvas.
    ///
    /// # Errors
    ///
    /// Propagates canvas failures. The host decides whether to skip the
    /// frame or stop. Animation state touched before the failure stays
    /// advanced.
    fn on_paint(&mut self, canvas: &mut C, region: Rect) -> Result<(), CanvasError>;
}
