use glam::{EulerRot, Mat4, Quat, Vec3};

/// Order in which Euler axis rotations compose (`XYZ` means `Rx * Ry * Rz`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

/// Euler angles in radians, with their composition order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub order: RotationOrder,
}

impl Euler {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, order: RotationOrder::Xyz }
    }

    /// Changes the composition order, keeping the angles.
    pub fn reorder(mut self, order: RotationOrder) -> Self {
        self.order = order;
        self
    }

    pub fn to_quat(self) -> Quat {
        let Euler { x, y, z, order } = self;
        match order {
            RotationOrder::Xyz => Quat::from_euler(EulerRot::XYZ, x, y, z),
            RotationOrder::Xzy => Quat::from_euler(EulerRot::XZY, x, z, y),
            RotationOrder::Yxz => Quat::from_euler(EulerRot::YXZ, y, x, z),
            RotationOrder::Yzx => Quat::from_euler(EulerRot::YZX, y, z, x),
            RotationOrder::Zxy => Quat::from_euler(EulerRot::ZXY, z, x, y),
            RotationOrder::Zyx => Quat::from_euler(EulerRot::ZYX, z, y, x),
        }
    }
}

/// Position, rotation and scale of a scene object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Euler,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::default(),
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Model matrix in scale, rotate, translate order.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation.to_quat(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_by_default() {
        assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn order_changes_the_result() {
        let e = Euler::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        let v = Vec3::Z;
        let xyz = e.to_quat() * v;
        let yxz = e.reorder(RotationOrder::Yxz).to_quat() * v;
        assert!((xyz - yxz).length() > 0.5);
    }

    #[test]
    fn xyz_composes_x_outermost() {
        let e = Euler::new(0.3, -0.7, 1.1);
        let expected = Quat::from_rotation_x(0.3) * Quat::from_rotation_y(-0.7) * Quat::from_rotation_z(1.1);
        assert!(e.to_quat().abs_diff_eq(expected, 1e-6));

        let e = e.reorder(RotationOrder::Yxz);
        let expected = Quat::from_rotation_y(-0.7) * Quat::from_rotation_x(0.3) * Quat::from_rotation_z(1.1);
        assert!(e.to_quat().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn translation_applies_after_scale() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            scale: Vec3::splat(2.0),
            ..Transform::default()
        };
        let p = t.matrix().transform_point3(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3::new(3.0, 2.0, 2.0));
    }
}
