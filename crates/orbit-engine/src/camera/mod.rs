//! Cameras and camera controllers.
//!
//! - `PerspectiveCamera` owns projection parameters and a look-at pose
//! - `OrbitControls` repositions it around a target from drag/wheel input,
//!   with optional frame-rate-independent damping
//! - `CursorLook` is the simpler rig that places the camera from a
//!   normalized cursor and aims it at a fixed point

mod cursor_look;
mod orbit;
mod perspective;

pub use cursor_look::CursorLook;
pub use orbit::{OrbitConfig, OrbitControls};
pub use perspective::PerspectiveCamera;
