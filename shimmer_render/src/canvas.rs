// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Point};
use shimmer_core::canvas::{Canvas, CanvasError};
use shimmer_core::paint::{Color, Paint, clamp_unit};
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, Mask, MaskType, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

use crate::convert;

/// A [`Canvas`] backed by a premultiplied RGBA8 [`Pixmap`].
///
/// Offscreen buffers are themselves `PixmapCanvas`es. All drawing is
/// anti-aliased and uses source-over blending.
#[derive(Clone, Debug, PartialEq)]
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    /// Creates a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::BufferAllocation`] for zero or oversized
    /// dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Pixmap::new(width, height)
            .map(Self::from_pixmap)
            .ok_or(CanvasError::BufferAllocation { width, height })
    }

    /// Wraps an existing pixmap.
    #[must_use]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// The underlying pixmap.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the canvas and returns the pixmap.
    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Premultiplied RGBA8 pixel data, row-major with no padding.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Fills every pixel with `color`, ignoring what was there.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(convert::color(color));
    }

    /// Replaces the pixmap with a transparent one of a new size. Keeps the
    /// current pixmap if the size is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::BufferAllocation`] if the new pixmap cannot be
    /// allocated; the canvas is left as it was.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        if (width, height) == (self.pixmap.width(), self.pixmap.height()) {
            return Ok(());
        }
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Reads back one pixel as straight (non-premultiplied) RGBA8.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    fn full_rect(&self) -> Option<Rect> {
        Rect::from_xywh(
            0.0,
            0.0,
            convert::to_f32(f64::from(self.pixmap.width())),
            convert::to_f32(f64::from(self.pixmap.height())),
        )
    }
}

fn skia_paint(shader: tiny_skia::Shader<'static>) -> tiny_skia::Paint<'static> {
    tiny_skia::Paint {
        shader,
        anti_alias: true,
        blend_mode: BlendMode::SourceOver,
        ..tiny_skia::Paint::default()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "composite offsets are pixel positions well inside i32"
)]
fn pixel_offset(v: f64) -> i32 {
    v.round() as i32
}

impl Canvas for PixmapCanvas {
    type Buffer = Self;

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn mask(&mut self, source: &Paint, mask: &Paint) {
        let (Some(source), Some(mask_shader), Some(rect)) = (
            convert::shader(source),
            convert::shader(mask),
            self.full_rect(),
        ) else {
            return;
        };
        let Some(mut coverage) = Pixmap::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        coverage.fill_rect(rect, &skia_paint(mask_shader), Transform::identity(), None);
        let mask = Mask::from_pixmap(coverage.as_ref(), MaskType::Alpha);
        self.pixmap
            .fill_rect(rect, &skia_paint(source), Transform::identity(), Some(&mask));
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint, transform: Affine) {
        let (Some(path), Some(shader)) = (convert::path(path), convert::shader(paint)) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &skia_paint(shader),
            FillRule::Winding,
            convert::transform(transform),
            None,
        );
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, line_width: f64, transform: Affine) {
        // tiny-skia treats width 0 as a hairline.
        if line_width.is_nan() || line_width <= 0.0 {
            return;
        }
        let (Some(path), Some(shader)) = (convert::path(path), convert::shader(paint)) else {
            return;
        };
        let stroke = Stroke {
            width: convert::to_f32(line_width),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &skia_paint(shader),
            &stroke,
            convert::transform(transform),
            None,
        );
    }

    fn create_buffer(&self, width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::new(width, height)
    }

    fn composite(&mut self, buffer: &Self, origin: Point, mask: Color) {
        let paint = PixmapPaint {
            opacity: convert::to_f32(clamp_unit(mask.a)),
            blend_mode: BlendMode::SourceOver,
            quality: FilterQuality::Nearest,
        };
        self.pixmap.draw_pixmap(
            pixel_offset(origin.x),
            pixel_offset(origin.y),
            buffer.pixmap.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }
}
