use glam::Vec3;
use rand::Rng;

use constants::{ATTEMPT_CAP_FACTOR, LayerConfig};

use crate::bounds::Bounds3;
use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::sampler::SurfaceSampler;

/// Interior shell depth as a fraction of the largest bound.
const INNER_DEPTH_FACTOR: f32 = 0.03;
/// Skew pushing interior depths towards the surface.
const INNER_DEPTH_BIAS: f32 = 2.2;
/// Steepness of the depth shading falloff.
const DEPTH_SHADE_EXPONENT: f32 = 2.4;

/// One built point layer.
///
/// `positions` is what a displacement pass may overwrite; it always
/// derives from `base_positions`, which never change after build, so
/// deformation can never accumulate drift.
#[derive(Debug, Clone)]
pub struct PointLayer {
    config: LayerConfig,
    positions: Vec<Vec3>,
    base_positions: Vec<Vec3>,
    colours: Vec<Vec3>,
    attempts: usize,
}

impl PointLayer {
    /// Wraps an already-sampled point set, e.g. one loaded from disk.
    pub fn from_parts(config: LayerConfig, positions: Vec<Vec3>, colours: Vec<Vec3>) -> Self {
        let base_positions = positions.clone();
        let attempts = positions.len();
        Self {
            config,
            positions,
            base_positions,
            colours,
            attempts,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    pub fn colours(&self) -> &[Vec3] {
        &self.colours
    }

    /// Sampler draws consumed during the build, rejections included.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(self.positions.iter().copied())
    }

    /// Rigidly shifts the layer, rest positions included, so the ghost
    /// copy deforms around its offset location rather than the
    /// original one.
    pub fn translate(&mut self, offset: Vec3) {
        for position in &mut self.positions {
            *position += offset;
        }
        for position in &mut self.base_positions {
            *position += offset;
        }
    }

    /// Restores every position to its rest value.
    pub fn reset_positions(&mut self) {
        self.positions.copy_from_slice(&self.base_positions);
    }

    pub(crate) fn displacement_slices(&mut self) -> (&[Vec3], &mut [Vec3]) {
        let Self {
            positions,
            base_positions,
            ..
        } = self;
        (base_positions.as_slice(), positions.as_mut_slice())
    }
}

/// Builds one layer by rejection-sampling the mesh surface.
///
/// Vertex normals are computed first when the mesh carries none. The
/// attempt budget bounds work on configurations the surface cannot
/// satisfy; such layers simply come up short.
pub fn build_layer<R: Rng + ?Sized>(
    mesh: &mut TriangleMesh,
    config: &LayerConfig,
    fallback_colour: Vec3,
    rng: &mut R,
) -> Result<PointLayer> {
    mesh.ensure_vertex_normals();
    let bounds = mesh.bounds();
    let axis = bounds.dominant_axis();
    let inner_depth = INNER_DEPTH_FACTOR * bounds.max_dimension();
    let sampler = SurfaceSampler::build(mesh, fallback_colour)?;

    let mut positions = Vec::with_capacity(config.count);
    let mut colours = Vec::with_capacity(config.count);
    let budget = config.count.saturating_mul(ATTEMPT_CAP_FACTOR);
    let mut attempts = 0usize;

    while positions.len() < config.count && attempts < budget {
        attempts += 1;
        let sample = sampler.sample(rng);

        let axis_alignment = sample.normal[axis].abs();
        let normal_perp = (1.0 - axis_alignment * axis_alignment).max(0.0).sqrt();
        if config.edge_only && normal_perp < config.edge_threshold {
            continue;
        }

        let mut position = sample.position;
        let mut relative_depth = 0.0;
        if config.inner && inner_depth > 0.0 {
            let depth = inner_depth * (0.1 + rng.random::<f32>().powf(INNER_DEPTH_BIAS) * 0.9);
            relative_depth = depth / inner_depth;
            position -= sample.normal * depth;
        }

        let normal_shade = 0.75 + 0.25 * (sample.normal.y * 0.5 + 0.5);
        let depth_shade = (1.0 - relative_depth).powf(DEPTH_SHADE_EXPONENT);
        let contour_boost = 1.0 + config.edge_contrast * normal_perp;
        let brightness =
            normal_shade * (0.35 + 0.65 * depth_shade) * config.colour_boost * contour_boost;
        let shaded = sample.colour * brightness;
        colours.push(Vec3::new(
            shaded.x.max(0.0).powf(config.gamma),
            shaded.y.max(0.0).powf(config.gamma),
            shaded.z.max(0.0).powf(config.gamma),
        ));
        positions.push(position);
    }

    let base_positions = positions.clone();
    Ok(PointLayer {
        config: *config,
        positions,
        base_positions,
        colours,
        attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plain_config(count: usize) -> LayerConfig {
        LayerConfig {
            count,
            ..LayerConfig::default()
        }
    }

    #[test]
    fn test_plain_layer_fills_exactly() {
        let mut cube = TriangleMesh::unit_cube();
        let mut rng = StdRng::seed_from_u64(1);
        let layer = build_layer(&mut cube, &plain_config(1_000), Vec3::ONE, &mut rng)
            .expect("layer builds");
        assert_eq!(layer.len(), 1_000);
        assert_eq!(layer.attempts(), 1_000);
        assert_eq!(layer.positions(), layer.base_positions());
        let bounds = cube.bounds().expanded(1e-6);
        assert!(layer.positions().iter().all(|p| bounds.contains(*p, 0.0)));
    }

    #[test]
    fn test_build_computes_missing_normals() {
        let mut cube = TriangleMesh::unit_cube();
        assert!(!cube.has_normals());
        let mut rng = StdRng::seed_from_u64(2);
        build_layer(&mut cube, &plain_config(10), Vec3::ONE, &mut rng).expect("layer builds");
        assert!(cube.has_normals());
    }

    #[test]
    fn test_translate_shifts_rest_positions_too() {
        let mut cube = TriangleMesh::unit_cube();
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer =
            build_layer(&mut cube, &plain_config(64), Vec3::ONE, &mut rng).expect("layer builds");
        let before = layer.base_positions().to_vec();
        let offset = Vec3::new(0.02, -0.02, 0.03);
        layer.translate(offset);
        for (shifted, original) in layer.base_positions().iter().zip(&before) {
            assert_eq!(*shifted, *original + offset);
        }
        assert_eq!(layer.positions(), layer.base_positions());
    }

    #[test]
    fn test_reset_positions_restores_rest_pose() {
        let layer_config = plain_config(4);
        let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let mut layer = PointLayer::from_parts(layer_config, points.clone(), vec![Vec3::ONE; 4]);
        {
            let (_, positions) = layer.displacement_slices();
            for position in positions.iter_mut() {
                *position += Vec3::splat(0.25);
            }
        }
        assert_ne!(layer.positions(), layer.base_positions());
        layer.reset_positions();
        assert_eq!(layer.positions(), points.as_slice());
    }
}
