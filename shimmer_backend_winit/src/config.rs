// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host configuration.

use std::borrow::Cow;

use shimmer_core::paint::Color;
use shimmer_core::timer::TimerConfig;

/// What the host does when [`on_paint`] returns an error.
///
/// [`on_paint`]: shimmer_core::host::FrameHandler::on_paint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramePolicy {
    /// Drop the frame, keep the previous image on screen, and carry on.
    #[default]
    SkipFrame,
    /// Stop the event loop and return the error from [`run`](crate::run).
    Exit,
}

/// Configuration for [`run`](crate::run).
#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    /// Window title.
    pub title: Cow<'static, str>,
    /// Initial inner width in physical pixels.
    pub width: u32,
    /// Initial inner height in physical pixels.
    pub height: u32,
    /// Tick cadence.
    pub timer: TimerConfig,
    /// Paint error handling.
    pub policy: FramePolicy,
    /// Color the canvas is cleared to before each paint.
    pub clear: Color,
}

impl HostConfig {
    /// Default window width.
    pub const DEFAULT_WIDTH: u32 = 640;
    /// Default window height.
    pub const DEFAULT_HEIGHT: u32 = 480;

    /// A 640×480 window ticking at 60 Hz, skipping failed frames, cleared to
    /// white.
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            timer: TimerConfig::sixty_hz(),
            policy: FramePolicy::SkipFrame,
            clear: Color::rgb(1.0, 1.0, 1.0),
        }
    }

    /// Sets the initial inner size.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the tick cadence.
    #[must_use]
    pub const fn with_timer(mut self, timer: TimerConfig) -> Self {
        self.timer = timer;
        self
    }

    /// Sets the paint error policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FramePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the clear color.
    #[must_use]
    pub const fn with_clear(mut self, clear: Color) -> Self {
        self.clear = clear;
        self
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new("shimmer")
    }
}
