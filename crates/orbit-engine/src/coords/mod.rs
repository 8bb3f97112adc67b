//! Coordinate and size types shared across the runtime, input and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shaders that need bottom-origin coordinates flip explicitly.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::{ViewportSize, DEFAULT_MAX_PIXEL_RATIO};
