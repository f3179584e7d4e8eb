// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame rate measurement over fixed reporting windows.

use crate::time::{Duration, HostTime, Timebase};

/// Default reporting window: two seconds in a nanosecond timebase.
pub const DEFAULT_WINDOW: Duration = Duration(2_000_000_000);

/// Frames counted over one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpsReport {
    /// Frames painted in the window.
    pub frames: u64,
    /// Length of the window.
    pub elapsed: Duration,
    /// Average frames per second over the window.
    pub fps: f64,
}

/// Counts frames and yields an [`FpsReport`] once per window.
#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    timebase: Timebase,
    window: Duration,
    window_start: HostTime,
    frames: u64,
}

impl FpsCounter {
    /// Starts counting at `now` with the default two-second window.
    #[must_use]
    pub const fn new(now: HostTime, timebase: Timebase) -> Self {
        Self::with_window(now, timebase, DEFAULT_WINDOW)
    }

    /// Starts counting at `now`, reporting once more than `window` has
    /// elapsed.
    #[must_use]
    pub const fn with_window(now: HostTime, timebase: Timebase, window: Duration) -> Self {
        Self {
            timebase,
            window,
            window_start: now,
            frames: 0,
        }
    }

    /// Frames counted in the current window.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Counts one frame painted at `now`.
    ///
    /// Returns a report and starts a new window when strictly more than the
    /// window length has passed since the last report.
    pub fn frame(&mut self, now: HostTime) -> Option<FpsReport> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed <= self.window {
            return None;
        }
        let fps = self.frames as f64 / elapsed.as_secs_f64(self.timebase);
        let report = FpsReport {
            frames: self.frames,
            elapsed,
            fps,
        };
        self.window_start = now;
        self.frames = 0;
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: u64 = 1_000_000_000;

    #[test]
    fn quiet_until_window_exceeded() {
        let mut fps = FpsCounter::new(HostTime(0), Timebase::NANOS);
        for i in 1..=120 {
            assert_eq!(fps.frame(HostTime(i * SEC / 60)), None, "within 2 s");
        }
        assert_eq!(fps.frames(), 120, "all counted");
    }

    #[test]
    fn reports_and_resets() {
        let mut fps = FpsCounter::new(HostTime(0), Timebase::NANOS);
        for i in 1..=100 {
            let _ = fps.frame(HostTime(i * SEC / 50));
        }
        let report = fps
            .frame(HostTime(101 * SEC / 50))
            .expect("2.02 s is past the window");
        assert_eq!(report.frames, 101, "every frame in the window");
        assert_eq!(report.elapsed, Duration(101 * SEC / 50), "window length");
        assert!(libm::fabs(report.fps - 50.0) < 1e-9, "50 fps, got {}", report.fps);
        assert_eq!(fps.frames(), 0, "fresh window");
    }
}
