//! Asset loading pipeline from JSON configuration to spawned layers.

/// Visual configuration loading with built-in fallback.
pub mod config_loader;

/// Bevy mesh to core triangle mesh conversion.
pub mod mesh_convert;

/// GLTF polling, layer construction and scene spawning.
pub mod model_loader;

/// Loading progress flags driving the state transition.
pub mod progress;
