use glam::Vec3;
use rand::Rng;

use crate::error::{Result, VeilError};
use crate::mesh::TriangleMesh;

/// One random draw from the mesh surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    /// Geometric normal of the sampled triangle, not interpolated.
    pub normal: Vec3,
    pub colour: Vec3,
}

/// Area-weighted surface sampler.
///
/// Build walks the index buffer once and stores a cumulative area
/// table; each draw is then a binary search plus a barycentric fold.
/// Draws are independent, uniform over the weighted surface area.
pub struct SurfaceSampler<'a> {
    mesh: &'a TriangleMesh,
    cumulative_areas: Vec<f32>,
    total_area: f32,
    fallback_colour: Vec3,
}

impl<'a> SurfaceSampler<'a> {
    pub fn build(mesh: &'a TriangleMesh, fallback_colour: Vec3) -> Result<Self> {
        Self::build_weighted(mesh, None, fallback_colour)
    }

    /// Optional per-vertex weights scale triangle areas, biasing draws
    /// towards heavier regions. Zero-weight triangles are never drawn.
    pub fn build_weighted(
        mesh: &'a TriangleMesh,
        weights: Option<&[f32]>,
        fallback_colour: Vec3,
    ) -> Result<Self> {
        if mesh.triangle_count() == 0 {
            return Err(VeilError::EmptyMesh);
        }
        if let Some(weights) = weights {
            if weights.len() != mesh.vertex_count() {
                return Err(VeilError::AttributeLength {
                    attribute: "weight",
                    expected: mesh.vertex_count(),
                    actual: weights.len(),
                });
            }
        }

        let mut cumulative_areas = Vec::with_capacity(mesh.triangle_count());
        let mut total_area = 0.0f32;
        for (index, triangle) in mesh.triangles().iter().enumerate() {
            let [a, b, c] = mesh.triangle(index);
            let mut area = (b - a).cross(c - a).length() * 0.5;
            if let Some(weights) = weights {
                let [i, j, k] = *triangle;
                area *= (weights[i as usize] + weights[j as usize] + weights[k as usize]) / 3.0;
            }
            total_area += area.max(0.0);
            cumulative_areas.push(total_area);
        }
        if !total_area.is_finite() || total_area <= 0.0 {
            return Err(VeilError::DegenerateSurface);
        }

        Ok(Self {
            mesh,
            cumulative_areas,
            total_area,
            fallback_colour,
        })
    }

    /// Total weighted surface area seen by the sampler.
    pub fn total_area(&self) -> f32 {
        self.total_area
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SurfacePoint {
        let target = rng.random::<f32>() * self.total_area;
        let index = self
            .cumulative_areas
            .partition_point(|&area| area <= target)
            .min(self.cumulative_areas.len() - 1);
        self.sample_triangle(index, rng)
    }

    fn sample_triangle<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> SurfacePoint {
        let [a, b, c] = self.mesh.triangle(index);
        let mut u = rng.random::<f32>();
        let mut v = rng.random::<f32>();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        let position = a + (b - a) * u + (c - a) * v;
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let colour = match self.mesh.colours() {
            Some(colours) => {
                let [i, j, k] = self.mesh.triangles()[index];
                colours[i as usize] * (1.0 - u - v)
                    + colours[j as usize] * u
                    + colours[k as usize] * v
            }
            None => self.fallback_colour,
        };
        SurfacePoint {
            position,
            normal,
            colour,
        }
    }
}
