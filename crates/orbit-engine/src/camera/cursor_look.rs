use glam::Vec3;

use super::PerspectiveCamera;

/// Places the camera from a normalized cursor (`[-0.5, 0.5]` per axis) and
/// aims it at `target`.
///
/// Screen +Y is down, so the cursor's vertical axis is not negated while the
/// horizontal one is: moving right swings the camera left around the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLook {
    pub amplitude: f32,
    pub target: Vec3,
}

impl CursorLook {
    pub fn new(amplitude: f32, target: Vec3) -> Self {
        Self { amplitude, target }
    }

    /// Moves the camera in its XY plane; depth is left untouched.
    pub fn apply(&self, camera: &mut PerspectiveCamera, cursor: (f32, f32)) {
        camera.position.x = cursor.0 * -self.amplitude;
        camera.position.y = cursor.1 * self.amplitude;
        camera.look_at(self.target);
    }
}

impl Default for CursorLook {
    fn default() -> Self {
        Self::new(5.0, Vec3::ZERO)
    }
}
