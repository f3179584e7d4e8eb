// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The winit application handler.

use std::sync::Arc;

use shimmer_core::host::FrameHandler;
use shimmer_core::trace::{PaintErrorEvent, PhaseKind, TraceSink, Tracer};
use shimmer_render::PixmapCanvas;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::HostError;
use crate::clock::{Clock, InstantClock};
use crate::config::{FramePolicy, HostConfig};
use crate::driver::{FrameDriver, PaintOutcome, traced_phase};
use crate::presenter::Presenter;

/// Window, GPU presenter and frame loop state for one [`run`](crate::run).
pub(crate) struct App<H, S> {
    config: HostConfig,
    driver: FrameDriver<H>,
    sink: S,
    clock: InstantClock,
    canvas: PixmapCanvas,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    /// First error that stopped the loop.
    error: Option<HostError>,
}

impl<H: FrameHandler<PixmapCanvas>, S: TraceSink> App<H, S> {
    pub(crate) fn new(config: HostConfig, handler: H, sink: S) -> Result<Self, HostError> {
        let clock = InstantClock::new();
        let canvas = PixmapCanvas::new(config.width, config.height)?;
        let driver = FrameDriver::new(handler, &config, clock.now());
        Ok(Self {
            config,
            driver,
            sink,
            clock,
            canvas,
            window: None,
            presenter: None,
            error: None,
        })
    }

    /// Returns the error that stopped the loop, if any.
    pub(crate) fn finish(self) -> Result<(), HostError> {
        self.error.map_or(Ok(()), Err)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: HostError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), HostError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(HostError::Window)?,
        );
        self.presenter = Some(Presenter::new(Arc::clone(&window))?);

        // The window manager may not honor the requested size.
        let size = window.inner_size();
        self.resize(size)?;
        self.window = Some(window);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), HostError> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        if let Some(presenter) = &mut self.presenter {
            presenter.resize(size.width, size.height);
        }
        let Err(error) = self.canvas.resize(size.width, size.height) else {
            return Ok(());
        };

        // The old canvas stays in place and is stretched to the window.
        let fatal = self.config.policy == FramePolicy::Exit;
        Tracer::new(&mut self.sink).paint_error(&PaintErrorEvent {
            frame_index: self.driver.frame_index(),
            timestamp: self.clock.now(),
            error,
            fatal,
        });
        if fatal {
            Err(error.into())
        } else {
            Ok(())
        }
    }

    fn redraw(&mut self) -> Result<(), HostError> {
        let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) else {
            return Ok(());
        };
        let mut tracer = Tracer::new(&mut self.sink);
        let frame_index = self.driver.frame_index();

        let mut summary = match self.driver.paint(&mut self.canvas, &self.clock, &mut tracer) {
            PaintOutcome::Painted(summary) => summary,
            PaintOutcome::Skipped => return Ok(()),
            PaintOutcome::Exit(error) => return Err(error.into()),
        };

        let canvas = &self.canvas;
        traced_phase(
            PhaseKind::Upload,
            &mut summary,
            frame_index,
            &self.clock,
            &mut tracer,
            || presenter.upload(canvas),
        );
        let presented = traced_phase(
            PhaseKind::Present,
            &mut summary,
            frame_index,
            &self.clock,
            &mut tracer,
            || presenter.present(window),
        );
        summary.set_dropped(presented.is_err());
        tracer.frame_summary(&summary.finish());
        presented
    }
}

impl<H: FrameHandler<PixmapCanvas>, S: TraceSink> ApplicationHandler for App<H, S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.open_window(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let result = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                Ok(())
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => Ok(()),
        };
        if let Err(error) = result {
            self.fail(event_loop, error);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self
            .driver
            .poll_timer(&self.clock, &mut Tracer::new(&mut self.sink))
        {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.clock.instant_at(self.driver.next_deadline()),
        ));
    }
}

impl<H, S> core::fmt::Debug for App<H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("window", &self.window.as_ref().map(|w| w.id()))
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
