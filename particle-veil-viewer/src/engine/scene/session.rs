use bevy::prelude::*;
use particle_veil_core::{InteractionState, PointHit, PointLayer, Ray, intersect_layers};

use crate::engine::render::point_material::PointSpriteMaterial;

/// One spawned layer: the CPU-side point data the raycaster queries
/// plus the handles the frame driver mutates.
pub struct LayerRuntime {
    pub cloud: PointLayer,
    pub material: Handle<PointSpriteMaterial>,
    pub entity: Entity,
}

/// Everything built from one model load. Replaced wholesale when the
/// model is rebuilt; never mutated incrementally.
#[derive(Resource)]
pub struct RenderSession {
    pub layers: Vec<LayerRuntime>,
    /// Inverse of the framing transform, for world-to-model rays.
    pub local_from_world: Mat4,
    /// Raycast tolerance expressed in model units.
    pub local_tolerance: f32,
}

impl RenderSession {
    /// Nearest point hit by a world-space ray, tested against the rest
    /// positions of every layer in model space.
    pub fn raycast(&self, world_ray: &Ray) -> Option<PointHit> {
        let local_ray = world_ray.transformed(self.local_from_world);
        intersect_layers(
            &local_ray,
            self.layers.iter().map(|layer| &layer.cloud),
            self.local_tolerance,
        )
    }

    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.cloud.len()).sum()
    }
}

/// Smoothed pointer target shared by the raycast and frame systems.
#[derive(Resource, Default)]
pub struct PointerState(pub InteractionState);
