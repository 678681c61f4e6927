//! Runtime systems that animate the veil once the layers exist.

/// FPS overlay refresh from the frame time diagnostics.
pub mod fps_tracking;

/// Per-frame uniform rewrite driving every layer material.
pub mod frame_driver;

/// Keyboard switching between the model pose and procedural targets.
pub mod morph_control;

/// Cursor raycasting into the point cloud.
pub mod pointer_tracking;
