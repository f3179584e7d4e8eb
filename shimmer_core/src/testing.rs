// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas that records operations instead of rasterizing them.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point};

use crate::canvas::{Canvas, CanvasError};
use crate::paint::{Color, Paint};

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Mask {
        source: Paint,
        mask: Paint,
    },
    Fill {
        path: BezPath,
        paint: Paint,
        transform: Affine,
    },
    Stroke {
        path: BezPath,
        paint: Paint,
        line_width: f64,
        transform: Affine,
    },
    Composite {
        width: u32,
        height: u32,
        ops: Vec<Op>,
        origin: Point,
        mask: Color,
    },
}

#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) ops: Vec<Op>,
    pub(crate) fail_buffers: bool,
}

impl RecordingCanvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl Canvas for RecordingCanvas {
    type Buffer = Self;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn mask(&mut self, source: &Paint, mask: &Paint) {
        self.ops.push(Op::Mask {
            source: source.clone(),
            mask: mask.clone(),
        });
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint, transform: Affine) {
        self.ops.push(Op::Fill {
            path: path.clone(),
            paint: paint.clone(),
            transform,
        });
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, line_width: f64, transform: Affine) {
        self.ops.push(Op::Stroke {
            path: path.clone(),
            paint: paint.clone(),
            line_width,
            transform,
        });
    }

    fn create_buffer(&self, width: u32, height: u32) -> Result<Self, CanvasError> {
        if self.fail_buffers || width == 0 || height == 0 {
            return Err(CanvasError::BufferAllocation { width, height });
        }
        Ok(Self::new(width, height))
    }

    fn composite(&mut self, buffer: &Self, origin: Point, mask: Color) {
        self.ops.push(Op::Composite {
            width: buffer.width,
            height: buffer.height,
            ops: buffer.ops.clone(),
            origin,
            mask,
        });
    }
}
