use glam::{Mat4, Vec3};

use crate::layer::PointLayer;

/// A ray with unit direction, in whichever space it was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray re-expressed through `matrix`, direction renormalised.
    pub fn transformed(&self, matrix: Mat4) -> Self {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }
}

/// Nearest accepted point along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Closest point on the ray to the accepted cloud point.
    pub point: Vec3,
    /// Ray parameter at `point`.
    pub distance: f32,
    /// Index of the accepted point within its layer.
    pub index: usize,
}

/// Brute-force pointer picking against a point layer.
///
/// A point counts as hit when its perpendicular distance to the ray is
/// within `tolerance`; among hits the smallest ray parameter wins.
/// Points behind the origin are ignored.
pub fn intersect_layer(ray: &Ray, layer: &PointLayer, tolerance: f32) -> Option<PointHit> {
    let tolerance_squared = tolerance * tolerance;
    let mut best: Option<PointHit> = None;
    for (index, &point) in layer.positions().iter().enumerate() {
        let t = (point - ray.origin).dot(ray.direction);
        if t < 0.0 {
            continue;
        }
        let on_ray = ray.point_at(t);
        if on_ray.distance_squared(point) > tolerance_squared {
            continue;
        }
        if best.as_ref().is_none_or(|hit| t < hit.distance) {
            best = Some(PointHit {
                point: on_ray,
                distance: t,
                index,
            });
        }
    }
    best
}

/// Nearest hit across several layers.
pub fn intersect_layers<'a, I>(ray: &Ray, layers: I, tolerance: f32) -> Option<PointHit>
where
    I: IntoIterator<Item = &'a PointLayer>,
{
    let mut best: Option<PointHit> = None;
    for layer in layers {
        if let Some(hit) = intersect_layer(ray, layer, tolerance) {
            if best.as_ref().is_none_or(|b| hit.distance < b.distance) {
                best = Some(hit);
            }
        }
    }
    best
}
