use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Sampling and shading recipe for one point layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Number of points the builder aims for.
    pub count: usize,
    /// Sink points below the surface along the inverted normal.
    pub inner: bool,
    /// Keep only samples whose normal is nearly perpendicular to the
    /// dominant bounding axis.
    pub edge_only: bool,
    /// Sprite size before projection scaling.
    pub size: f32,
    /// Base opacity of the layer material.
    pub opacity: f32,
    /// Minimum perpendicularity for edge-only acceptance.
    pub edge_threshold: f32,
    /// Uniform brightness multiplier.
    pub colour_boost: f32,
    /// Per-channel gamma applied after shading.
    pub gamma: f32,
    /// Extra brightness on silhouette-like points.
    pub edge_contrast: f32,
}

impl Default for LayerConfig {
    fn default() -> Self {
        DEFAULT_LAYER
    }
}

pub const DEFAULT_LAYER: LayerConfig = LayerConfig {
    count: 160_000,
    inner: false,
    edge_only: false,
    size: 0.003,
    opacity: 0.9,
    edge_threshold: 0.65,
    colour_boost: 1.0,
    gamma: 1.0,
    edge_contrast: 0.0,
};

/// Dense skin layer carrying most of the silhouette.
pub const SURFACE_LAYER: LayerConfig = LayerConfig {
    count: 120_000,
    inner: false,
    edge_only: false,
    size: 0.0042,
    opacity: 1.0,
    edge_threshold: 0.65,
    colour_boost: 1.1,
    gamma: 0.9,
    edge_contrast: 0.35,
};

/// Sparse bright layer restricted to contour-like normals.
pub const EDGE_LAYER: LayerConfig = LayerConfig {
    count: 70_000,
    inner: false,
    edge_only: true,
    size: 0.0052,
    opacity: 1.0,
    edge_threshold: 0.55,
    colour_boost: 1.45,
    gamma: 0.8,
    edge_contrast: 0.75,
};

/// Dim fill sunk below the surface to fake interior volume.
pub const INNER_LAYER: LayerConfig = LayerConfig {
    count: 45_000,
    inner: true,
    edge_only: false,
    size: 0.0036,
    opacity: 0.3,
    edge_threshold: 0.65,
    colour_boost: 0.9,
    gamma: 1.0,
    edge_contrast: 0.0,
};

/// Faint duplicate shell rendered at a fixed offset.
pub const GHOST_LAYER: LayerConfig = LayerConfig {
    count: 80_000,
    inner: false,
    edge_only: false,
    size: 0.0044,
    opacity: 0.22,
    edge_threshold: 0.65,
    colour_boost: 0.7,
    gamma: 1.1,
    edge_contrast: 0.0,
};

/// Model-space offset of the ghost layer relative to the main shell.
pub const GHOST_OFFSET: Vec3 = Vec3::new(0.02, -0.02, 0.03);

/// Point colour used when the source mesh carries no vertex colours
/// and no material tint.
pub const FALLBACK_POINT_COLOUR: Vec3 = Vec3::new(0.561, 0.827, 1.0);

/// Rejection sampling gives up after this many draws per requested
/// point, leaving the layer short rather than looping forever.
pub const ATTEMPT_CAP_FACTOR: usize = 25;
