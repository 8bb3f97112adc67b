//! Scene graph.
//!
//! Deliberately flat: one renderable object and one camera. Geometry produces
//! CPU mesh data; renderers upload it once and reuse it every frame.

mod geometry;
mod material;
mod object;
mod transform;

pub use geometry::{Geometry, MeshData, Topology};
pub use material::Material;
pub use object::{Scene, SceneObject};
pub use transform::{Euler, RotationOrder, Transform};
