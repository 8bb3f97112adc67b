//! Shader parameters and colour laws.
//!
//! `ShaderParameters` is the per-frame snapshot of everything a fragment
//! stage may read (time, pointer, resolution, tint). `ColorLaw` is the CPU
//! mirror of a fragment stage; `VerticalGradient` matches
//! `render/shaders/gradient.wgsl` exactly and is what the GPU path uploads.

mod law;
mod params;
mod uniform;

pub use law::{ColorLaw, FragCoord, VerticalGradient};
pub use params::{PointerState, ShaderParameters};
pub use uniform::{GradientUniform, WireframeUniform};
