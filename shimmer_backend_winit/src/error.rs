// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use shimmer_core::canvas::CanvasError;

/// Errors that stop the host.
#[derive(Debug)]
pub enum HostError {
    /// The event loop could not be created or failed while running.
    EventLoop(winit::error::EventLoopError),
    /// The window could not be created.
    Window(winit::error::OsError),
    /// The window surface could not be created.
    Surface(wgpu::CreateSurfaceError),
    /// No GPU adapter can present to the window surface.
    NoAdapter,
    /// The adapter refused to create a device.
    Device(wgpu::RequestDeviceError),
    /// The surface reports no configuration for this adapter.
    SurfaceConfig,
    /// The surface failed while acquiring a frame.
    Present(wgpu::SurfaceError),
    /// A canvas allocation failed and the policy is
    /// [`FramePolicy::Exit`](crate::FramePolicy::Exit), or the initial
    /// canvas could not be allocated.
    Canvas(CanvasError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "event loop: {e}"),
            Self::Window(e) => write!(f, "window creation failed: {e}"),
            Self::Surface(e) => write!(f, "surface creation failed: {e}"),
            Self::NoAdapter => f.write_str("no GPU adapter compatible with the window surface"),
            Self::Device(e) => write!(f, "device request failed: {e}"),
            Self::SurfaceConfig => f.write_str("surface is not supported by the adapter"),
            Self::Present(e) => write!(f, "frame acquisition failed: {e}"),
            Self::Canvas(e) => write!(f, "canvas: {e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::Present(e) => Some(e),
            Self::Canvas(e) => Some(e),
            Self::NoAdapter | Self::SurfaceConfig => None,
        }
    }
}

impl From<CanvasError> for HostError {
    fn from(e: CanvasError) -> Self {
        Self::Canvas(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn canvas_error_is_the_source() {
        let err = HostError::from(CanvasError::BufferAllocation {
            width: 0,
            height: 480,
        });
        assert_eq!(
            err.to_string(),
            "canvas: failed to allocate a 0x480 offscreen buffer",
            "message"
        );
        assert!(err.source().is_some(), "wraps the canvas error");
    }

    #[test]
    fn unit_variants_have_no_source() {
        assert!(HostError::NoAdapter.source().is_none(), "no adapter");
        assert!(HostError::SurfaceConfig.source().is_none(), "no config");
        assert!(
            HostError::NoAdapter.to_string().contains("adapter"),
            "readable message"
        );
    }
}
