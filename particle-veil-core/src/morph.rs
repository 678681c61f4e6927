use std::f32::consts::TAU;

use glam::Vec3;

use crate::deform::position_hash;

/// Alternate rest poses the cloud can ease towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphMode {
    #[default]
    Model,
    Sphere,
    Torus,
    Line,
}

impl MorphMode {
    /// Stable id handed to the shader uniform.
    pub fn index(self) -> u32 {
        match self {
            MorphMode::Model => 0,
            MorphMode::Sphere => 1,
            MorphMode::Torus => 2,
            MorphMode::Line => 3,
        }
    }
}

const SPHERE_RADIUS: f32 = 0.9;
const TORUS_MAJOR_RADIUS: f32 = 0.7;
const TORUS_MINOR_RADIUS: f32 = 0.25;
const LINE_SPREAD: f32 = 0.12;
const LINE_HALF_HEIGHT: f32 = 1.1;

/// Procedural target position for a point. Derived solely from the
/// rest position through three decorrelated hashes, so the mapping is
/// stable frame to frame and identical on CPU and GPU.
pub fn morph_target(base: Vec3, mode: MorphMode) -> Vec3 {
    if mode == MorphMode::Model {
        return base;
    }
    let h1 = position_hash(base + Vec3::X);
    let h2 = position_hash(base + Vec3::Y);
    let h3 = position_hash(base + Vec3::Z);
    match mode {
        MorphMode::Model => base,
        MorphMode::Sphere => {
            let theta = h1 * TAU;
            let phi = (1.0 - 2.0 * h2).acos();
            Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ) * SPHERE_RADIUS
        }
        MorphMode::Torus => {
            let u = h1 * TAU;
            let v = h2 * TAU;
            let ring = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * v.cos();
            Vec3::new(
                ring * u.cos(),
                TORUS_MINOR_RADIUS * v.sin(),
                ring * u.sin(),
            )
        }
        MorphMode::Line => Vec3::new(
            (h2 - 0.5) * LINE_SPREAD,
            (h1 * 2.0 - 1.0) * LINE_HALF_HEIGHT,
            (h3 - 0.5) * LINE_SPREAD,
        ),
    }
}

/// Rest position after blending towards the active morph target.
pub fn rest_position(base: Vec3, mode: MorphMode, amount: f32) -> Vec3 {
    if mode == MorphMode::Model || amount <= 0.0 {
        return base;
    }
    base.lerp(morph_target(base, mode), amount.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scatter(count: usize, seed: u64) -> Vec<Vec3> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Vec3::new(
                    rng.random::<f32>() - 0.5,
                    rng.random::<f32>() - 0.5,
                    rng.random::<f32>() - 0.5,
                )
            })
            .collect()
    }

    #[test]
    fn test_sphere_targets_lie_on_sphere() {
        for base in scatter(500, 41) {
            let target = morph_target(base, MorphMode::Sphere);
            assert_relative_eq!(target.length(), SPHERE_RADIUS, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_torus_targets_lie_on_torus() {
        for base in scatter(500, 43) {
            let target = morph_target(base, MorphMode::Torus);
            let ring_distance = (target.x * target.x + target.z * target.z).sqrt();
            let tube = ((ring_distance - TORUS_MAJOR_RADIUS).powi(2) + target.y * target.y).sqrt();
            assert_relative_eq!(tube, TORUS_MINOR_RADIUS, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_line_targets_stay_in_column() {
        for base in scatter(500, 47) {
            let target = morph_target(base, MorphMode::Line);
            assert!(target.x.abs() <= LINE_SPREAD * 0.5 + 1e-6);
            assert!(target.y.abs() <= LINE_HALF_HEIGHT + 1e-6);
            assert!(target.z.abs() <= LINE_SPREAD * 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let base = Vec3::new(0.3, -0.2, 0.1);
        assert_eq!(rest_position(base, MorphMode::Sphere, 0.0), base);
        assert_eq!(rest_position(base, MorphMode::Model, 1.0), base);

        let target = morph_target(base, MorphMode::Sphere);
        assert!(rest_position(base, MorphMode::Sphere, 1.0).distance(target) < 1e-6);
        let midpoint = rest_position(base, MorphMode::Sphere, 0.5);
        assert_relative_eq!(
            midpoint.distance(base),
            midpoint.distance(target),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_targets_are_stable() {
        let base = Vec3::new(-0.4, 0.7, 0.2);
        for mode in [MorphMode::Sphere, MorphMode::Torus, MorphMode::Line] {
            assert_eq!(morph_target(base, mode), morph_target(base, mode));
        }
    }
}
