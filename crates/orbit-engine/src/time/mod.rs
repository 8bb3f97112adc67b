//! Time subsystem.
//!
//! Two clocks with distinct jobs:
//! - `FrameClock` produces per-iteration deltas (`FrameTime`) for motion and damping
//! - `Clock` reports seconds since start for the shader `time` uniform
//!
//! Both accept an explicit `Instant` so callers (and tests) control sampling.

mod clock;
mod frame_clock;

pub use clock::Clock;
pub use frame_clock::{FrameClock, FrameTime};
