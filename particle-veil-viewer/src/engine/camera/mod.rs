//! Orbit camera resource and its input controller.

pub mod orbit_camera;
