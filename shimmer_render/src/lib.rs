// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A `tiny-skia` implementation of the shimmer [`Canvas`].
//!
//! [`PixmapCanvas`] rasterizes on the CPU into a premultiplied RGBA8
//! [`Pixmap`](tiny_skia::Pixmap). Hosts hand it to
//! [`FrameHandler::on_paint`](shimmer_core::host::FrameHandler::on_paint)
//! and then upload or encode [`PixmapCanvas::data`]; tests read pixels back
//! with [`PixmapCanvas::pixel`].
//!
//! Gradients, paths and transforms from `shimmer_core` are converted to
//! their `tiny-skia` equivalents at draw time. Colors are clamped to the
//! unit range there, so oscillators that overshoot their bounds for a frame
//! saturate instead of wrapping.
//!
//! [`Canvas`]: shimmer_core::canvas::Canvas

mod canvas;
mod convert;

pub use canvas::PixmapCanvas;
