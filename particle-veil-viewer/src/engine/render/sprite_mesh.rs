use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use particle_veil_core::PointLayer;

use crate::engine::render::point_material::ATTRIBUTE_SPRITE_CORNER;

/// Two counter-clockwise triangles covering one sprite quad.
const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Expands a point layer into quad geometry for the sprite material.
///
/// Each point becomes six vertices sharing its rest position and
/// colour; the shader spreads them apart in view space. The geometry
/// is uploaded once and never rewritten, so all animation lives in the
/// uniform block.
pub fn sprite_mesh_for_layer(layer: &PointLayer) -> Mesh {
    let vertex_count = layer.len() * QUAD_CORNERS.len();
    let mut positions: Vec<Vec3> = Vec::with_capacity(vertex_count);
    let mut colours: Vec<[f32; 4]> = Vec::with_capacity(vertex_count);
    let mut corners: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for (position, colour) in layer.base_positions().iter().zip(layer.colours()) {
        for corner in QUAD_CORNERS {
            positions.push(*position);
            colours.push([colour.x, colour.y, colour.z, 1.0]);
            corners.push(corner);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        bytemuck::cast_vec::<Vec3, [f32; 3]>(positions),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_attribute(ATTRIBUTE_SPRITE_CORNER, corners);
    mesh
}
