// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded oscillators, a canvas contract and an animated scene.
//!
//! `shimmer_core` holds everything about the animation that does not depend
//! on a window system or a rasterizer. It is `no_std` compatible (with
//! `alloc`) and never reads a clock: hosts feed it timer ticks and paint
//! requests, and hand it a [`Canvas`](canvas::Canvas) to draw into.
//!
//! # Architecture
//!
//! ```text
//!   Host timer ──► FrameTimer::poll() ──► FrameHandler::on_tick()
//!                                               │ repaint?
//!                 ┌─────────────────────────────┘
//!                 ▼
//!   Host paint ──► FrameHandler::on_paint(canvas, region)
//!                       │
//!                       ├─► Background: render, then tick
//!                       └─► each layer: tick, then render
//! ```
//!
//! **[`oscillator`]**: A value that steps by a fixed delta and reverses
//! direction after crossing a bound.
//!
//! **[`paint`]**: Colors and gradients in unit-range `f64` components.
//!
//! **[`canvas`]**: The [`Canvas`](canvas::Canvas) trait a rasterizer
//! implements: masked paints, path fill and stroke, offscreen buffers and
//! masked compositing.
//!
//! **[`animate`]**: The [`Animated`](animate::Animated) capability shared
//! by the background and every layer.
//!
//! **[`background`]**: A vignetted diagonal gradient with a drifting
//! circle, driven by five oscillators.
//!
//! **[`layer`]**: A translucent sprite with pulsing scale and opacity,
//! drawn offscreen and composited.
//!
//! **[`scene`]**: [`Scene`](scene::Scene), the
//! [`FrameHandler`](host::FrameHandler) hosts drive.
//!
//! **[`host`]**: The host-facing callback contract.
//!
//! **[`time`]**, **[`timer`]**, **[`fps`]**: Host time, a fixed-cadence
//! tick source and a frame-rate counter.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animate;
pub mod background;
pub mod canvas;
pub mod fps;
pub mod host;
pub mod layer;
pub mod oscillator;
pub mod paint;
pub mod scene;
pub mod time;
pub mod timer;
pub mod trace;

#[cfg(test)]
mod testing;
