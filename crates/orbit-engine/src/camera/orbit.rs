use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::PerspectiveCamera;

/// Residual deltas below this are dropped so damping settles in finite time.
const SETTLE_EPSILON: f32 = 1e-6;

/// Keeps the polar angle off the poles, where the look-at basis degenerates.
const POLE_EPSILON: f32 = 1e-4;

/// Damping factors are specified per 1/60 s step.
const REFERENCE_RATE: f32 = 60.0;

/// Orbit controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    pub enable_damping: bool,

    /// Fraction of the pending motion applied per 1/60 s. Clamped to `(0, 1]`.
    pub damping_factor: f32,

    pub rotate_speed: f32,
    pub zoom_speed: f32,

    pub min_distance: f32,
    pub max_distance: f32,

    /// Polar angle limits in radians, measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.1,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        }
    }
}

/// Drag/wheel-driven camera orbit around a fixed target.
///
/// Input accumulates into pending spherical deltas. `update` applies them
/// once per frame: instantly without damping, or a frame-rate-independent
/// fraction `1 - (1 - f)^(dt * 60)` with damping. The applied fraction never
/// exceeds the remainder, so the camera approaches its goal without overshoot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub config: OrbitConfig,
    pub target: Vec3,

    pending_theta: f32,
    pending_phi: f32,
    /// Pending radius change as a natural-log scale factor.
    pending_log_scale: f32,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig, target: Vec3) -> Self {
        Self {
            config,
            target,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_log_scale: 0.0,
        }
    }

    /// Queues a rotation from a pointer drag of `(dx, dy)` logical pixels.
    ///
    /// A drag across the full surface height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, surface_height: f32) {
        if !(surface_height > 0.0) {
            return;
        }
        let k = TAU * self.config.rotate_speed / surface_height;
        self.pending_theta -= dx * k;
        self.pending_phi -= dy * k;
    }

    /// Queues a dolly from wheel input. Positive `lines` (scroll up) moves closer.
    pub fn dolly(&mut self, lines: f32) {
        self.pending_log_scale += lines * self.config.zoom_speed * 0.95f32.ln();
    }

    pub fn has_pending(&self) -> bool {
        self.pending_theta.abs() > SETTLE_EPSILON
            || self.pending_phi.abs() > SETTLE_EPSILON
            || self.pending_log_scale.abs() > SETTLE_EPSILON
    }

    /// Drops any queued motion.
    pub fn stop(&mut self) {
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_log_scale = 0.0;
    }

    /// Applies one frame of motion to `camera`. Returns `true` if the camera moved.
    ///
    /// With nothing pending the camera is left bit-for-bit unchanged.
    pub fn update(&mut self, camera: &mut PerspectiveCamera, dt: f32) -> bool {
        if !self.has_pending() {
            self.stop();
            return false;
        }

        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            self.stop();
            return false;
        }

        let t = self.step_fraction(dt);

        let d_theta = self.pending_theta * t;
        let d_phi = self.pending_phi * t;
        let d_log = self.pending_log_scale * t;

        let theta = offset.x.atan2(offset.z) + d_theta;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_phi).clamp(
            self.config.min_polar_angle.max(POLE_EPSILON),
            self.config.max_polar_angle.min(PI - POLE_EPSILON),
        );
        let radius = (radius * d_log.exp())
            .clamp(self.config.min_distance, self.config.max_distance);

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );

        camera.position = self.target + new_offset;
        camera.look_at(self.target);

        self.pending_theta -= d_theta;
        self.pending_phi -= d_phi;
        self.pending_log_scale -= d_log;
        if !self.has_pending() {
            self.stop();
        }

        true
    }

    fn step_fraction(&self, dt: f32) -> f32 {
        if !self.config.enable_damping {
            return 1.0;
        }
        let f = self.config.damping_factor.clamp(f32::EPSILON, 1.0);
        let steps = (dt.max(0.0) * REFERENCE_RATE).max(f32::EPSILON);
        (1.0 - (1.0 - f).powf(steps)).clamp(0.0, 1.0)
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitConfig::default(), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 1.0)
            .with_position(Vec3::new(0.0, 1.0, 5.0))
            .with_target(Vec3::ZERO)
    }

    fn azimuth(cam: &PerspectiveCamera) -> f32 {
        cam.position.x.atan2(cam.position.z)
    }

    // ── idle ──────────────────────────────────────────────────────────────

    #[test]
    fn idle_update_leaves_camera_untouched() {
        let mut cam = camera();
        let before = cam.clone();
        let mut controls = OrbitControls::default();
        for _ in 0..3 {
            assert!(!controls.update(&mut cam, 1.0 / 60.0));
        }
        assert_eq!(cam, before);
    }

    // ── without damping ───────────────────────────────────────────────────

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut cam = camera();
        let radius = cam.position.length();
        let mut controls = OrbitControls::new(
            OrbitConfig { enable_damping: false, ..Default::default() },
            Vec3::ZERO,
        );
        // A quarter of the surface height is a quarter turn.
        controls.rotate_by_pixels(-150.0, 0.0, 600.0);
        assert!(controls.update(&mut cam, 1.0 / 60.0));
        assert!(!controls.has_pending());
        assert!((azimuth(&cam) - PI / 2.0).abs() < 1e-4);
        assert!((cam.position.length() - radius).abs() < 1e-4);
    }

    // ── damping ───────────────────────────────────────────────────────────

    #[test]
    fn damping_converges_without_overshoot() {
        let mut cam = camera();
        let mut controls = OrbitControls::default();
        controls.rotate_by_pixels(-150.0, 0.0, 600.0);

        let goal = PI / 2.0;
        let mut last = azimuth(&cam);
        for _ in 0..2000 {
            controls.update(&mut cam, 1.0 / 60.0);
            let a = azimuth(&cam);
            assert!(a >= last - 1e-6, "azimuth moved backwards");
            assert!(a <= goal + 1e-4, "azimuth overshot the goal");
            last = a;
        }
        assert!((last - goal).abs() < 1e-3);
        assert!(!controls.has_pending());
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let run = |dt: f32, frames: usize| {
            let mut cam = camera();
            let mut controls = OrbitControls::default();
            controls.rotate_by_pixels(-100.0, 0.0, 600.0);
            for _ in 0..frames {
                controls.update(&mut cam, dt);
            }
            azimuth(&cam)
        };

        let at_60 = run(1.0 / 60.0, 30);
        let at_30 = run(1.0 / 30.0, 15);
        assert!((at_60 - at_30).abs() < 1e-3);
    }

    #[test]
    fn skipped_updates_freeze_mid_transition() {
        let mut cam = camera();
        let mut controls = OrbitControls::default();
        controls.rotate_by_pixels(-150.0, 0.0, 600.0);
        controls.update(&mut cam, 1.0 / 60.0);
        assert!(controls.has_pending());

        let frozen_cam = cam.clone();
        let frozen_controls = controls.clone();

        // A resize lands while frames go by without `update`.
        cam.set_aspect(16.0 / 9.0);
        assert_eq!(cam.position, frozen_cam.position);
        assert_eq!(cam.target, frozen_cam.target);
        assert_eq!(controls, frozen_controls);
        assert!(controls.has_pending());

        // The next update resumes from where the transition stopped.
        assert!(controls.update(&mut cam, 1.0 / 60.0));
        assert_ne!(cam.position, frozen_cam.position);
        assert!(azimuth(&cam) > azimuth(&frozen_cam));
    }

    // ── limits ────────────────────────────────────────────────────────────

    #[test]
    fn polar_angle_stays_off_the_pole() {
        let mut cam = camera();
        let mut controls = OrbitControls::new(
            OrbitConfig { enable_damping: false, ..Default::default() },
            Vec3::ZERO,
        );
        controls.rotate_by_pixels(0.0, 10_000.0, 600.0);
        controls.update(&mut cam, 1.0 / 60.0);
        let horizontal = glam::Vec2::new(cam.position.x, cam.position.z).length();
        assert!(horizontal > 0.0);
        assert!(cam.position.y > 0.0);
        assert!(cam.view().is_finite());
    }

    #[test]
    fn dolly_moves_closer_and_respects_min_distance() {
        let mut cam = camera();
        let start = cam.position.length();
        let mut controls = OrbitControls::new(
            OrbitConfig { enable_damping: false, min_distance: 1.0, ..Default::default() },
            Vec3::ZERO,
        );
        controls.dolly(1.0);
        controls.update(&mut cam, 1.0 / 60.0);
        assert!((cam.position.length() - start * 0.95).abs() < 1e-4);

        controls.dolly(500.0);
        controls.update(&mut cam, 1.0 / 60.0);
        assert!((cam.position.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn zero_height_drag_is_ignored() {
        let mut controls = OrbitControls::default();
        controls.rotate_by_pixels(10.0, 10.0, 0.0);
        assert!(!controls.has_pending());
    }
}
