//! Camera state for the 3D view.
//!
//! Holds the view parameters an external frame loop reads and writes:
//! position, target, yaw/pitch/roll, height offset, distance, field of view,
//! orientation and mode.

/// Camera struct and view mode.
pub mod core;

pub use self::core::{Camera, CameraMode};
