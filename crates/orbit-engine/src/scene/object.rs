use glam::Mat4;

use crate::camera::PerspectiveCamera;

use super::{Geometry, Material, Transform};

/// A renderable object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::default(),
        }
    }
}

/// One object viewed through one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub object: SceneObject,
    pub camera: PerspectiveCamera,
}

impl Scene {
    pub fn new(object: SceneObject, camera: PerspectiveCamera) -> Self {
        Self { object, camera }
    }

    /// Model-view-projection for the object.
    pub fn model_view_projection(&self) -> Mat4 {
        self.camera.view_proj() * self.object.transform.matrix()
    }
}
