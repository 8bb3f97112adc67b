//! Colour model shared between the shader parameter code and renderers.
//!
//! Colours are straight-alpha, linear RGBA. Surfaces are sRGB where the
//! platform allows, so shader output is encoded on store.

pub mod color;

pub use color::Color;
