//! Point sprite rendering through Bevy's material pipeline.

/// Camera-facing quad material with the animated uniform block.
pub mod point_material;

/// Expanded quad geometry built from a point layer.
pub mod sprite_mesh;
