//! Bevy front end for the particle veil point-cloud renderer.
//!
//! Wires asset loading, layer construction, pointer interaction and the
//! per-frame uniform driver around the engine-agnostic core crate.

/// Visual configuration asset describing layers and deformation.
pub mod assets;

/// Simple orbit camera driven by mouse input.
pub mod camera;

/// Application setup, state machine and window configuration.
pub mod core;

/// JSON visual configuration and model loading pipeline.
pub mod loading;

/// Point sprite material and expanded quad geometry.
pub mod render;

/// Scene-level resources shared between loading and runtime systems.
pub mod scene;

/// Runtime systems for pointer tracking, animation and diagnostics.
pub mod systems;
