use anyhow::{Context, Result};
use ouroboros::self_referencing;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::{DEFAULT_MAX_PIXEL_RATIO, ViewportSize};
use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Upper bound on the drawable pixel ratio.
    pub max_pixel_ratio: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "orbit".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            max_pixel_ratio: DEFAULT_MAX_PIXEL_RATIO,
        }
    }
}

/// Presentation mode of the window.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WindowMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl WindowMode {
    pub fn toggled(self) -> Self {
        match self {
            WindowMode::Windowed => WindowMode::Fullscreen,
            WindowMode::Fullscreen => WindowMode::Windowed,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl RuntimeCtx {
    /// Ends the event loop cleanly.
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    /// Ends the event loop and makes `Runtime::run` return `err`.
    ///
    /// Only the first failure is kept.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.exit_requested = true;
        if self.failure.is_none() {
            self.failure = Some(err);
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clock: FrameClock,
    viewport: ViewportSize,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,

    /// Startup failure reported back from `Runtime::run`.
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let inner = window.inner_size();
        let viewport = ViewportSize::from_physical(
            inner.width,
            inner.height,
            window.scale_factor(),
            self.config.max_pixel_ratio,
        )
        .unwrap_or_default();
        let (dw, dh) = viewport.drawable_size();

        log::info!(
            "window {}x{} logical, pixel ratio {}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            clock: FrameClock::default(),
            viewport,
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init, PhysicalSize::new(dw, dh)))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        let app = &mut self.app;
        let control = entry.with(|fields| {
            let window = WindowCtx {
                id: fields.window.id(),
                window: fields.window,
            };
            app.on_resize(&window, *fields.viewport)
        });

        self.window = Some(entry);
        if control == AppControl::Exit {
            self.request_exit();
        }
        Ok(())
    }

    /// Resizes the surface to match the window and notifies the app.
    fn handle_resize(&mut self, physical: PhysicalSize<u32>) {
        let max_ratio = self.config.max_pixel_ratio;
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let mut control = AppControl::Continue;
        entry.with_mut(|fields| {
            let scale = fields.window.scale_factor();
            let Some(viewport) =
                ViewportSize::from_physical(physical.width, physical.height, scale, max_ratio)
            else {
                // Minimized: frames are skipped until a real size arrives.
                fields.gpu.resize(PhysicalSize::new(0, 0));
                return;
            };

            let (dw, dh) = viewport.drawable_size();
            fields.gpu.resize(PhysicalSize::new(dw, dh));
            *fields.viewport = viewport;

            let window = WindowCtx {
                id: fields.window.id(),
                window: fields.window,
            };
            control = app.on_resize(&window, viewport);
            fields.window.request_redraw();
        });

        if control == AppControl::Exit {
            self.request_exit();
        }
    }

    fn handle_input(&mut self, event: &WindowEvent) {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let mut control = AppControl::Continue;
        entry.with_mut(|fields| {
            let Some(ev) = translate_window_event(fields.window, fields.input_state, event) else {
                return;
            };
            let derived = fields.input_state.apply_event(&ev, Instant::now());

            let window = WindowCtx {
                id: fields.window.id(),
                window: fields.window,
            };
            for ev in std::iter::once(ev).chain(derived) {
                if app.on_input(&window, &ev) == AppControl::Exit {
                    control = AppControl::Exit;
                }
            }
        });

        if control == AppControl::Exit {
            self.request_exit();
        }
    }

    fn handle_redraw(&mut self) {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let mut runtime_ctx = RuntimeCtx::default();
        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                time: ft,
                viewport: *fields.viewport,
                runtime: &mut runtime_ctx,
            };

            control = app.on_frame(&mut ctx);
        });

        if let Some(err) = runtime_ctx.take_failure() {
            self.failure.get_or_insert(err);
        }
        if control == AppControl::Exit || runtime_ctx.exit_requested() {
            self.request_exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.failure = Some(e);
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the render loop reschedules itself every frame.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let ours = self
            .window
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id()) == window_id);
        if !ours {
            return;
        }

        self.handle_input(&event);

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.window = None;
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => self.handle_resize(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.window.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.handle_resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.handle_redraw(),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_requests_exit_and_keeps_first_error() {
        let mut ctx = RuntimeCtx::default();
        assert!(!ctx.exit_requested());

        ctx.fail(anyhow::anyhow!("surface out of memory"));
        ctx.fail(anyhow::anyhow!("later"));
        assert!(ctx.exit_requested());

        let err = ctx.take_failure().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("surface out of memory"));
        assert!(ctx.take_failure().is_none());
    }

    #[test]
    fn exit_carries_no_error() {
        let mut ctx = RuntimeCtx::default();
        ctx.exit();
        assert!(ctx.exit_requested());
        assert!(ctx.take_failure().is_none());
    }

    #[test]
    fn window_mode_toggles_both_ways() {
        assert_eq!(WindowMode::Windowed.toggled(), WindowMode::Fullscreen);
        assert_eq!(WindowMode::Fullscreen.toggled(), WindowMode::Windowed);
    }
}
