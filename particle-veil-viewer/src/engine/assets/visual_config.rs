use bevy::prelude::*;
use constants::{
    DEFAULT_DEFORMATION, DeformationParams, EDGE_LAYER, FALLBACK_POINT_COLOUR, GHOST_LAYER,
    GHOST_OFFSET, INNER_LAYER, LayerConfig, MODEL_ASSET_PATH, SURFACE_LAYER,
};
use serde::{Deserialize, Serialize};

/// Complete visual configuration as a Bevy asset. Mirrors the JSON structure
/// exactly; any missing field falls back to the compiled defaults.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
#[serde(default)]
pub struct VisualConfig {
    pub model_path: String,
    pub surface: LayerConfig,
    pub edge: LayerConfig,
    pub inner: LayerConfig,
    pub ghost: LayerConfig,
    pub ghost_offset: Vec3,
    pub fallback_colour: Vec3,
    pub deform: DeformationParams,
    pub seed: u64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            model_path: MODEL_ASSET_PATH.to_string(),
            surface: SURFACE_LAYER,
            edge: EDGE_LAYER,
            inner: INNER_LAYER,
            ghost: GHOST_LAYER,
            ghost_offset: GHOST_OFFSET,
            fallback_colour: FALLBACK_POINT_COLOUR,
            deform: DEFAULT_DEFORMATION,
            seed: 7,
        }
    }
}

impl VisualConfig {
    /// Layer configurations in draw order: surface, edge, inner, ghost.
    pub fn layers(&self) -> [&LayerConfig; 4] {
        [&self.surface, &self.edge, &self.inner, &self.ghost]
    }
}
