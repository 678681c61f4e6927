use glam::Vec3;

use crate::bounds::Bounds3;
use crate::error::{Result, VeilError};

/// Indexed triangle mesh with optional per-vertex normals and colours.
///
/// Positions and indices are validated on construction; attribute
/// setters check their length against the vertex count. Everything
/// else in the crate can then index without bounds anxiety.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
    normals: Option<Vec<Vec3>>,
    colours: Option<Vec<Vec3>>,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Result<Self> {
        if indices.is_empty() {
            return Err(VeilError::EmptyMesh);
        }
        let vertex_count = positions.len();
        for triangle in &indices {
            for &index in triangle {
                if index as usize >= vertex_count {
                    return Err(VeilError::IndexOutOfRange { index, vertex_count });
                }
            }
        }
        Ok(Self {
            positions,
            indices,
            normals: None,
            colours: None,
        })
    }

    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Result<Self> {
        if normals.len() != self.positions.len() {
            return Err(VeilError::AttributeLength {
                attribute: "normal",
                expected: self.positions.len(),
                actual: normals.len(),
            });
        }
        self.normals = Some(normals);
        Ok(self)
    }

    pub fn with_colours(mut self, colours: Vec<Vec3>) -> Result<Self> {
        if colours.len() != self.positions.len() {
            return Err(VeilError::AttributeLength {
                attribute: "colour",
                expected: self.positions.len(),
                actual: colours.len(),
            });
        }
        self.colours = Some(colours);
        Ok(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Corner positions of triangle `index`.
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = self.indices[index];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals.as_deref()
    }

    pub fn colours(&self) -> Option<&[Vec3]> {
        self.colours.as_deref()
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Computes area-weighted vertex normals when the mesh has none.
    /// Face contributions are weighted by the unnormalised cross
    /// product, so large triangles dominate their shared vertices.
    pub fn ensure_vertex_normals(&mut self) {
        if self.normals.is_some() {
            return;
        }
        let mut accumulated = vec![Vec3::ZERO; self.positions.len()];
        for triangle in &self.indices {
            let [a, b, c] = *triangle;
            let pa = self.positions[a as usize];
            let pb = self.positions[b as usize];
            let pc = self.positions[c as usize];
            let face = (pb - pa).cross(pc - pa);
            accumulated[a as usize] += face;
            accumulated[b as usize] += face;
            accumulated[c as usize] += face;
        }
        self.normals = Some(
            accumulated
                .into_iter()
                .map(|normal| normal.normalize_or_zero())
                .collect(),
        );
    }

    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(self.positions.iter().copied())
    }

    /// Axis-aligned unit cube centred on the origin, outward winding.
    pub fn unit_cube() -> Self {
        let h = 0.5;
        let positions = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let indices = vec![
            [0, 3, 2],
            [0, 2, 1],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [3, 7, 6],
            [3, 6, 2],
            [0, 4, 7],
            [0, 7, 3],
            [1, 2, 6],
            [1, 6, 5],
        ];
        Self {
            positions,
            indices,
            normals: None,
            colours: None,
        }
    }
}
