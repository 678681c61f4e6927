use bevy::prelude::*;
use particle_veil_core::FrameUniforms;

use crate::engine::assets::visual_config::VisualConfig;
use crate::engine::render::point_material::PointSpriteMaterial;
use crate::engine::scene::session::{PointerState, RenderSession};
use crate::engine::systems::morph_control::MorphState;

/// Advances the smoothed pointer and morph blend, then rewrites the
/// animated uniforms of every layer material. All band phases are
/// closed-form in elapsed time, so the materials stay in lockstep.
pub fn drive_frame_uniforms(
    time: Res<Time>,
    config: Res<VisualConfig>,
    session: Res<RenderSession>,
    mut pointer: ResMut<PointerState>,
    mut morph: ResMut<MorphState>,
    mut materials: ResMut<Assets<PointSpriteMaterial>>,
) {
    pointer.0.tick();
    morph.tick(config.deform.morph_smoothing);

    let uniforms = FrameUniforms::at(time.elapsed_secs(), &pointer.0, morph.mode, morph.amount);
    for layer in &session.layers {
        if let Some(material) = materials.get_mut(&layer.material) {
            material.params.write_frame(&uniforms);
        }
    }
}
