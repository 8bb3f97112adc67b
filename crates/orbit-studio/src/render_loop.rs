use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use orbit_engine::core::FrameStatus;
use orbit_engine::scene::Scene;
use orbit_engine::shader::ShaderParameters;
use orbit_engine::time::FrameTime;

use crate::config::CameraRig;
use crate::context::AppContext;

/// Lifecycle of the render loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    /// Created, no iteration run yet.
    Idle,
    Running,
    /// The shutdown token was tripped.
    Stopped,
    /// A frame failed to render; no further submissions.
    Halted,
}

impl LoopState {
    pub fn is_finished(self) -> bool {
        matches!(self, LoopState::Stopped | LoopState::Halted)
    }
}

/// Cancellation flag shared with whoever may end the loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownToken(Arc<AtomicBool>);

impl ShutdownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receives one scene + parameter snapshot per iteration and presents it.
pub trait FrameSink {
    fn submit(&mut self, scene: &Scene, params: &ShaderParameters) -> anyhow::Result<FrameStatus>;
}

/// Per-frame driver: advances time, steps the camera, submits one frame.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    token: ShutdownToken,
    presented: u64,

    /// Why the loop halted, until taken.
    error: Option<anyhow::Error>,
}

impl RenderLoop {
    pub fn new(token: ShutdownToken) -> Self {
        Self {
            state: LoopState::Idle,
            token,
            presented: 0,
            error: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames the sink reported as presented.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Hands over the render error that halted the loop. Returns `None`
    /// unless the loop is `Halted`, and on every call after the first.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// Runs one iteration for frame `ft`. Returns the state afterwards.
    ///
    /// Once `Stopped` or `Halted` the loop stays there and does nothing.
    pub fn tick<S>(&mut self, ft: FrameTime, ctx: &mut AppContext, sink: &mut S) -> LoopState
    where
        S: FrameSink + ?Sized,
    {
        if self.state.is_finished() {
            return self.state;
        }
        if self.token.is_cancelled() {
            log::info!("render loop stopped after {} frames", self.presented);
            self.state = LoopState::Stopped;
            return self.state;
        }
        self.state = LoopState::Running;

        if ctx.spin_speed != 0.0 {
            ctx.scene.object.transform.rotation.y += ctx.spin_speed * ft.dt;
        }

        let elapsed = ctx.clock.elapsed_at(ft.now);
        ctx.params.refresh(elapsed, ctx.pointer.raw(), ctx.viewport);

        match ctx.camera_rig {
            CameraRig::Orbit => {
                ctx.controls.update(&mut ctx.scene.camera, ft.dt);
            }
            CameraRig::CursorLook => {
                ctx.cursor_look.apply(&mut ctx.scene.camera, ctx.pointer.normalized());
            }
        }

        match sink.submit(&ctx.scene, &ctx.params) {
            Ok(FrameStatus::Presented) => self.presented += 1,
            Ok(FrameStatus::Skipped) => {
                log::trace!("frame {} skipped", ft.frame_index);
            }
            Err(err) => {
                log::error!("render failed at frame {}: {err:#}", ft.frame_index);
                self.state = LoopState::Halted;
                self.error = Some(err);
            }
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::{Duration, Instant};

    use anyhow::anyhow;
    use orbit_engine::coords::ViewportSize;
    use orbit_engine::time::Clock;

    use crate::config::StudioConfig;
    use crate::handlers;

    /// Records every submission instead of drawing.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(Scene, ShaderParameters)>,
        fail_at: Option<usize>,
    }

    impl FrameSink for RecordingSink {
        fn submit(&mut self, scene: &Scene, params: &ShaderParameters) -> anyhow::Result<FrameStatus> {
            if self.fail_at == Some(self.frames.len()) {
                return Err(anyhow!("device lost"));
            }
            self.frames.push((scene.clone(), *params));
            Ok(FrameStatus::Presented)
        }
    }

    fn setup(config: StudioConfig) -> (AppContext, Instant) {
        let t0 = Instant::now();
        let ctx = AppContext::new(&config, ViewportSize::default(), Clock::starting_at(t0));
        (ctx, t0)
    }

    /// Frame `frame` of a steady 16 ms cadence starting at `t0`.
    fn at(t0: Instant, frame: u32) -> FrameTime {
        FrameTime {
            dt: 0.016,
            now: t0 + Duration::from_millis(16) * frame,
            frame_index: u64::from(frame),
        }
    }

    // ── steady state ──────────────────────────────────────────────────────

    #[test]
    fn three_idle_ticks_submit_three_frames() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let start_pos = ctx.scene.camera.position;
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink::default();
        assert_eq!(rl.state(), LoopState::Idle);

        for i in 1..=3 {
            assert_eq!(rl.tick(at(t0, i), &mut ctx, &mut sink), LoopState::Running);
        }

        assert_eq!(sink.frames.len(), 3);
        assert_eq!(rl.presented(), 3);
        assert_eq!(ctx.scene.camera.position, start_pos);

        let times: Vec<f32> = sink.frames.iter().map(|(_, p)| p.elapsed_time).collect();
        assert!(times[0] > 0.0);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn elapsed_time_never_decreases() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink::default();

        rl.tick(at(t0, 5), &mut ctx, &mut sink);
        // An out-of-order sample must not move time backwards.
        rl.tick(at(t0, 2), &mut ctx, &mut sink);
        rl.tick(at(t0, 6), &mut ctx, &mut sink);

        let times: Vec<f32> = sink.frames.iter().map(|(_, p)| p.elapsed_time).collect();
        assert!(times.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn frames_carry_latest_viewport_and_pointer() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink::default();

        let vp = ViewportSize::new(800.0, 600.0, 1.0, 2.0).unwrap();
        handlers::on_resize(&mut ctx, vp);
        ctx.pointer.set(40.0, 30.0, vp);
        rl.tick(at(t0, 1), &mut ctx, &mut sink);

        let (scene, params) = &sink.frames[0];
        assert_eq!(params.resolution, vp);
        assert_eq!((params.pointer.x, params.pointer.y), (40.0, 30.0));
        assert_eq!(scene.camera.aspect, 800.0 / 600.0);
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn pending_orbit_moves_camera_once_per_tick() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink::default();

        ctx.controls.rotate_by_pixels(-60.0, 0.0, ctx.viewport.height);
        rl.tick(at(t0, 1), &mut ctx, &mut sink);
        rl.tick(at(t0, 2), &mut ctx, &mut sink);

        let p0 = sink.frames[0].0.camera.position;
        let p1 = sink.frames[1].0.camera.position;
        assert_ne!(p0, p1);
        assert!(ctx.controls.has_pending());
    }

    #[test]
    fn spin_rotates_object_by_elapsed_delta() {
        let cfg = StudioConfig { spin_speed: 1.0, ..Default::default() };
        let (mut ctx, t0) = setup(cfg);
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink::default();

        rl.tick(at(t0, 1), &mut ctx, &mut sink);
        let first = ctx.scene.object.transform.rotation.y;
        rl.tick(at(t0, 2), &mut ctx, &mut sink);
        let second = ctx.scene.object.transform.rotation.y;
        assert!((second - first - 0.016).abs() < 1e-4);
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn render_failure_halts_the_loop() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink { fail_at: Some(1), ..Default::default() };

        assert_eq!(rl.tick(at(t0, 1), &mut ctx, &mut sink), LoopState::Running);
        assert_eq!(rl.tick(at(t0, 2), &mut ctx, &mut sink), LoopState::Halted);

        sink.fail_at = None;
        assert_eq!(rl.tick(at(t0, 3), &mut ctx, &mut sink), LoopState::Halted);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn halted_loop_hands_back_its_error_once() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        let mut sink = RecordingSink { fail_at: Some(0), ..Default::default() };

        assert!(rl.take_error().is_none());
        assert_eq!(rl.tick(at(t0, 1), &mut ctx, &mut sink), LoopState::Halted);

        let err = rl.take_error().map(|e| e.to_string());
        assert_eq!(err.as_deref(), Some("device lost"));
        assert!(rl.take_error().is_none());
    }

    #[test]
    fn stopped_loop_has_no_error() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let mut rl = RenderLoop::new(ShutdownToken::new());
        rl.token.cancel();
        assert_eq!(rl.tick(at(t0, 1), &mut ctx, &mut RecordingSink::default()), LoopState::Stopped);
        assert!(rl.take_error().is_none());
    }

    #[test]
    fn cancellation_stops_before_submitting() {
        let (mut ctx, t0) = setup(StudioConfig::default());
        let token = ShutdownToken::new();
        let mut rl = RenderLoop::new(token.clone());
        let mut sink = RecordingSink::default();

        rl.tick(at(t0, 1), &mut ctx, &mut sink);
        token.cancel();
        assert_eq!(rl.tick(at(t0, 2), &mut ctx, &mut sink), LoopState::Stopped);
        assert_eq!(rl.tick(at(t0, 3), &mut ctx, &mut sink), LoopState::Stopped);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn token_is_shared_across_threads() {
        let token = ShutdownToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
