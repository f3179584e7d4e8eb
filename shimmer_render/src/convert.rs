// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from the core paint and geometry types to `tiny-skia`.

use kurbo::{Affine, BezPath, PathEl, Point};
use shimmer_core::paint::{Color, ColorStop, Paint};
use tiny_skia::{GradientStop, PathBuilder, Shader, SpreadMode, Transform};

#[expect(
    clippy::cast_possible_truncation,
    reason = "tiny-skia works in f32; canvas coordinates fit comfortably"
)]
pub(crate) fn to_f32(v: f64) -> f32 {
    v as f32
}

/// Clamps and converts a color. Out-of-range components are saturated.
pub(crate) fn color(c: Color) -> tiny_skia::Color {
    let c = c.clamped();
    tiny_skia::Color::from_rgba(to_f32(c.r), to_f32(c.g), to_f32(c.b), to_f32(c.a))
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

pub(crate) fn point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(to_f32(p.x), to_f32(p.y))
}

pub(crate) fn transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(to_f32(a), to_f32(b), to_f32(c), to_f32(d), to_f32(e), to_f32(f))
}

/// Converts a path. Returns `None` for empty or degenerate paths.
pub(crate) fn path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(to_f32(p.x), to_f32(p.y)),
            PathEl::LineTo(p) => pb.line_to(to_f32(p.x), to_f32(p.y)),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(to_f32(p1.x), to_f32(p1.y), to_f32(p2.x), to_f32(p2.y));
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                to_f32(p1.x),
                to_f32(p1.y),
                to_f32(p2.x),
                to_f32(p2.y),
                to_f32(p3.x),
                to_f32(p3.y),
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

fn stops(stops: &[ColorStop]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|s| GradientStop::new(to_f32(s.offset), color(s.color)))
        .collect()
}

/// Builds a shader for `paint`.
///
/// Returns `None` when `tiny-skia` rejects the gradient, e.g. with no stops
/// or a non-positive radius. Callers skip the draw in that case.
pub(crate) fn shader(paint: &Paint) -> Option<Shader<'static>> {
    match paint {
        Paint::Solid(c) => Some(Shader::SolidColor(color(*c))),
        Paint::Linear(g) => tiny_skia::LinearGradient::new(
            point(g.start),
            point(g.end),
            stops(&g.stops),
            SpreadMode::Pad,
            Transform::identity(),
        ),
        Paint::Radial(g) => {
            // tiny-skia radial gradients always start at radius 0.
            let rebased = g.stops_from_center()?;
            let center = point(g.center);
            tiny_skia::RadialGradient::new(
                center,
                center,
                to_f32(g.end_radius),
                stops(&rebased),
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
}
