use orbit_engine::coords::ViewportSize;
use orbit_engine::core::{App, AppControl, FrameCtx, FrameStatus, WindowCtx};
use orbit_engine::input::InputEvent;
use orbit_engine::paint::Color;
use orbit_engine::render::SceneRenderer;
use orbit_engine::scene::Scene;
use orbit_engine::shader::ShaderParameters;
use orbit_engine::time::Clock;

use crate::config::StudioConfig;
use crate::context::AppContext;
use crate::handlers;
use crate::render_loop::{FrameSink, LoopState, RenderLoop, ShutdownToken};

/// Studio application: wires runtime callbacks to handlers and the render loop.
pub struct StudioApp {
    ctx: AppContext,
    render_loop: RenderLoop,
    renderer: SceneRenderer,
    clear: Color,
}

impl StudioApp {
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            ctx: AppContext::new(config, ViewportSize::default(), Clock::new()),
            render_loop: RenderLoop::new(ShutdownToken::new()),
            renderer: SceneRenderer::new(),
            clear: Color::BLACK,
        }
    }
}

impl App for StudioApp {
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        if let Some(mode) = handlers::dispatch(&mut self.ctx, event, window.window_mode()) {
            window.set_window_mode(mode);
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, _window: &WindowCtx<'_>, viewport: ViewportSize) -> AppControl {
        log::debug!(
            "resize {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        handlers::on_resize(&mut self.ctx, viewport);
        AppControl::Continue
    }

    fn on_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let ft = frame.time;
        let state = {
            let mut sink = GpuSink {
                frame: &mut *frame,
                renderer: &mut self.renderer,
                clear: self.clear,
            };
            self.render_loop.tick(ft, &mut self.ctx, &mut sink)
        };

        match state {
            LoopState::Halted => match self.render_loop.take_error() {
                Some(err) => frame.runtime.fail(err),
                None => frame.runtime.exit(),
            },
            LoopState::Stopped => frame.runtime.exit(),
            LoopState::Idle | LoopState::Running => return AppControl::Continue,
        }

        log::info!(
            "render loop {state:?} after {} presented frames",
            self.render_loop.presented()
        );
        AppControl::Exit
    }
}

/// Presents frames through the engine's scene renderer.
struct GpuSink<'s, 'a, 'w> {
    frame: &'s mut FrameCtx<'a, 'w>,
    renderer: &'s mut SceneRenderer,
    clear: Color,
}

impl FrameSink for GpuSink<'_, '_, '_> {
    fn submit(&mut self, scene: &Scene, params: &ShaderParameters) -> anyhow::Result<FrameStatus> {
        let renderer = &mut *self.renderer;
        self.frame.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, scene, params);
        })
    }
}
