//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipeline, uniform buffer, mesh
//! buffers) and creates them lazily on first use, rebuilding the pipeline if
//! the surface format changes.
//!
//! Convention:
//! - geometry is in object space; the vertex stage applies the model-view-projection
//! - fragment stages read `@builtin(position)` in drawable pixels, top-left origin

mod common;
mod ctx;
mod gradient;
mod mesh;
mod scene;
mod wireframe;

pub use ctx::{RenderCtx, RenderTarget};
pub use gradient::GradientRenderer;
pub use scene::SceneRenderer;
pub use wireframe::WireframeRenderer;
