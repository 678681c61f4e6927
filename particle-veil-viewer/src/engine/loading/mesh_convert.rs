use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};
use particle_veil_core::TriangleMesh;

/// Convert a loaded Bevy mesh into the core triangle representation.
///
/// Returns `None` when the mesh has no positions, a non-float position
/// format, or indices that do not describe triangles. Normals and
/// vertex colours are carried over when present; the layer builder
/// recomputes normals itself when they are missing.
pub fn triangle_mesh_from_bevy(mesh: &Mesh) -> Option<TriangleMesh> {
    let positions: Vec<Vec3> = match mesh.attribute(Mesh::ATTRIBUTE_POSITION)? {
        VertexAttributeValues::Float32x3(values) => {
            values.iter().map(|p| Vec3::from_array(*p)).collect()
        }
        _ => return None,
    };

    let indices: Vec<[u32; 3]> = match mesh.indices() {
        Some(Indices::U32(raw)) => raw.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
        Some(Indices::U16(raw)) => raw
            .chunks_exact(3)
            .map(|c| [c[0] as u32, c[1] as u32, c[2] as u32])
            .collect(),
        // Non-indexed meshes are consecutive triangle soup.
        None => (0..positions.len() as u32 / 3)
            .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
            .collect(),
    };

    let mut triangle_mesh = TriangleMesh::new(positions, indices).ok()?;

    if let Some(normals) = read_vec3_attribute(mesh, Mesh::ATTRIBUTE_NORMAL) {
        if normals.len() == triangle_mesh.vertex_count() {
            triangle_mesh = match triangle_mesh.with_normals(normals) {
                Ok(with_normals) => with_normals,
                Err(_) => return None,
            };
        }
    }
    if let Some(colours) = read_colour_attribute(mesh) {
        if colours.len() == triangle_mesh.vertex_count() {
            triangle_mesh = match triangle_mesh.with_colours(colours) {
                Ok(with_colours) => with_colours,
                Err(_) => return None,
            };
        }
    }

    Some(triangle_mesh)
}

fn read_vec3_attribute(mesh: &Mesh, attribute: bevy::render::mesh::MeshVertexAttribute) -> Option<Vec<Vec3>> {
    match mesh.attribute(attribute)? {
        VertexAttributeValues::Float32x3(values) => {
            Some(values.iter().map(|v| Vec3::from_array(*v)).collect())
        }
        _ => None,
    }
}

fn read_colour_attribute(mesh: &Mesh) -> Option<Vec<Vec3>> {
    match mesh.attribute(Mesh::ATTRIBUTE_COLOR)? {
        VertexAttributeValues::Float32x3(values) => {
            Some(values.iter().map(|v| Vec3::from_array(*v)).collect())
        }
        VertexAttributeValues::Float32x4(values) => Some(
            values
                .iter()
                .map(|v| Vec3::new(v[0], v[1], v[2]))
                .collect(),
        ),
        _ => None,
    }
}
