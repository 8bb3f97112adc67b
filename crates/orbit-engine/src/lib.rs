//! Orbit engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the studio:
//! window/event loop, device, input tracking, frame timing, logging, and the
//! camera/scene/shader/render stack for a single scene object.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod camera;
pub mod shader;
