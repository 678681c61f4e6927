use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, MeshVertexBufferLayoutRef};
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
    VertexFormat,
};
use constants::{DeformationParams, LayerConfig, SPRITE_SCALE};
use particle_veil_core::FrameUniforms;

/// Corner of the expanded sprite quad, in units of the half sprite side.
pub const ATTRIBUTE_SPRITE_CORNER: MeshVertexAttribute =
    MeshVertexAttribute::new("SpriteCorner", 978122870, VertexFormat::Float32x2);

/// Uniform block shared by the vertex and fragment stages. The first
/// four rows are static per layer; `write_frame` rewrites the rest
/// every frame. Field order matches the WGSL struct.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct PointSpriteParams {
    /// World-space sprite side, already projection scaled.
    pub size: f32,
    pub opacity: f32,
    pub radius: f32,
    pub strength: f32,
    pub jitter_amplitude: f32,
    pub jitter_speed: f32,
    pub scan_width: f32,
    pub slice_width: f32,
    pub time: f32,
    pub mask_phase: f32,
    pub scan_speed: f32,
    pub scan_strength: f32,
    pub slice_position: f32,
    pub density_pulse: f32,
    pub edge_pulse: f32,
    pub morph_amount: f32,
    /// Smoothed pointer target in model space.
    pub pointer: Vec3,
    pub morph_mode: u32,
    pub push_direction: Vec3,
    pub pointer_active: u32,
}

impl PointSpriteParams {
    pub fn for_layer(config: &LayerConfig, deform: &DeformationParams) -> Self {
        Self {
            size: config.size * SPRITE_SCALE,
            opacity: config.opacity,
            radius: deform.radius,
            strength: deform.strength,
            jitter_amplitude: deform.jitter_amplitude,
            jitter_speed: deform.jitter_speed,
            scan_width: deform.scan_width,
            slice_width: deform.slice_width,
            time: 0.0,
            mask_phase: 0.0,
            scan_speed: 0.7,
            scan_strength: 0.7,
            slice_position: 0.0,
            density_pulse: 0.0,
            edge_pulse: 0.0,
            morph_amount: 0.0,
            pointer: Vec3::ZERO,
            morph_mode: 0,
            push_direction: Vec3::X,
            pointer_active: 0,
        }
    }

    /// Overwrite the animated slice of the block from this frame's
    /// evaluator inputs.
    pub fn write_frame(&mut self, uniforms: &FrameUniforms) {
        self.time = uniforms.time;
        self.mask_phase = uniforms.mask_phase;
        self.scan_speed = uniforms.scan_speed;
        self.scan_strength = uniforms.scan_strength;
        self.slice_position = uniforms.slice_position;
        self.density_pulse = uniforms.density_pulse;
        self.edge_pulse = uniforms.edge_pulse;
        self.morph_amount = uniforms.morph_amount;
        self.pointer = uniforms.pointer;
        self.morph_mode = uniforms.morph_mode.index();
        self.push_direction = uniforms.push_direction;
        self.pointer_active = uniforms.pointer_active as u32;
    }
}

/// Billboard point sprite material. Holds only the uniform block, so
/// per-frame mutation re-uploads a hundred bytes and never touches the
/// point geometry.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointSpriteMaterial {
    #[uniform(0)]
    pub params: PointSpriteParams,
}

impl PointSpriteMaterial {
    pub fn for_layer(config: &LayerConfig, deform: &DeformationParams) -> Self {
        Self {
            params: PointSpriteParams::for_layer(config, deform),
        }
    }
}

impl Material for PointSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/point_sprite.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/point_sprite.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(1),
            ATTRIBUTE_SPRITE_CORNER.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads face the camera regardless of winding.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
