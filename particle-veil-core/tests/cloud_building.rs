use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

use constants::{EDGE_LAYER, GHOST_LAYER, GHOST_OFFSET, INNER_LAYER, LayerConfig, SURFACE_LAYER};
use particle_veil_core::{TriangleMesh, build_layer};

fn cube() -> TriangleMesh {
    TriangleMesh::unit_cube()
}

#[test]
fn full_surface_layer_is_exact_and_unclipped() {
    let config = LayerConfig {
        count: 1_000,
        ..LayerConfig::default()
    };
    let mut mesh = cube();
    let mut rng = StdRng::seed_from_u64(101);
    let layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");

    assert_eq!(layer.len(), 1_000);
    let bounds = mesh.bounds().expanded(1e-6);
    for (position, base) in layer.positions().iter().zip(layer.base_positions()) {
        assert_eq!(position, base);
        assert!(bounds.contains(*position, 0.0));
    }
}

#[test]
fn edge_layer_avoids_dominant_axis_faces() {
    // On a cube the dominant axis resolves to X; samples from the two
    // X faces score zero perpendicularity and must all be rejected.
    let config = LayerConfig {
        count: 2_000,
        ..EDGE_LAYER
    };
    let mut mesh = cube();
    let mut rng = StdRng::seed_from_u64(103);
    let layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");

    assert_eq!(layer.len(), 2_000);
    assert!(layer.attempts() > layer.len());
    assert!(layer.positions().iter().all(|p| p.x.abs() < 0.5));
}

#[test]
fn unsatisfiable_edge_threshold_exhausts_the_budget() {
    // No normal can score above 1, so every draw is rejected and the
    // layer comes back empty without an error.
    let config = LayerConfig {
        count: 200,
        edge_only: true,
        edge_threshold: 1.5,
        ..LayerConfig::default()
    };
    let mut mesh = cube();
    let mut rng = StdRng::seed_from_u64(107);
    let layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");

    assert_eq!(layer.len(), 0);
    assert_eq!(layer.attempts(), 200 * constants::ATTEMPT_CAP_FACTOR);
}

#[test]
fn inner_layer_sinks_points_without_escaping() {
    let config = LayerConfig {
        count: 4_000,
        ..INNER_LAYER
    };
    let mut mesh = cube();
    let mut rng = StdRng::seed_from_u64(109);
    let layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");

    assert_eq!(layer.len(), 4_000);
    let bounds = mesh.bounds();
    let mut sunk = 0usize;
    for position in layer.positions() {
        assert!(bounds.contains(*position, 1e-6));
        // Depth is at least 10% of the shell depth along the normal,
        // so the face coordinate pulls off the surface.
        if position.abs().max_element() < 0.5 - 1e-3 {
            sunk += 1;
        }
    }
    assert!(sunk as f32 > layer.len() as f32 * 0.9, "sunk {sunk}");
}

#[test]
fn inner_points_are_dimmer_than_surface_points() {
    let surface_config = LayerConfig {
        count: 2_000,
        ..LayerConfig::default()
    };
    let inner_config = LayerConfig {
        count: 2_000,
        inner: true,
        ..LayerConfig::default()
    };
    let mut mesh = cube();
    let mut surface_rng = StdRng::seed_from_u64(113);
    let mut inner_rng = StdRng::seed_from_u64(113);
    let surface = build_layer(&mut mesh, &surface_config, Vec3::ONE, &mut surface_rng)
        .expect("surface layer");
    let inner =
        build_layer(&mut mesh, &inner_config, Vec3::ONE, &mut inner_rng).expect("inner layer");

    let mean = |layer: &particle_veil_core::PointLayer| {
        layer
            .colours()
            .iter()
            .map(|c| c.x + c.y + c.z)
            .sum::<f32>()
            / layer.len() as f32
    };
    assert!(mean(&inner) < mean(&surface));
}

#[test]
fn builds_are_deterministic_for_a_fixed_seed() {
    let mut mesh_a = cube();
    let mut mesh_b = cube();
    let mut rng_a = StdRng::seed_from_u64(127);
    let mut rng_b = StdRng::seed_from_u64(127);
    let a = build_layer(&mut mesh_a, &SURFACE_LAYER, Vec3::ONE, &mut rng_a).expect("layer a");
    let b = build_layer(&mut mesh_b, &SURFACE_LAYER, Vec3::ONE, &mut rng_b).expect("layer b");

    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colours(), b.colours());
    assert_eq!(a.attempts(), b.attempts());
}

#[test]
fn ghost_layer_is_a_rigid_translation() {
    let config = LayerConfig {
        count: 512,
        ..GHOST_LAYER
    };
    let mut mesh = cube();
    let mut rng = StdRng::seed_from_u64(131);
    let mut ghost = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");
    let untranslated = ghost.clone();
    ghost.translate(GHOST_OFFSET);

    for index in 0..ghost.len() {
        assert_eq!(
            ghost.positions()[index],
            untranslated.positions()[index] + GHOST_OFFSET
        );
        assert_eq!(
            ghost.base_positions()[index],
            untranslated.base_positions()[index] + GHOST_OFFSET
        );
    }
}

#[test]
fn mesh_colours_survive_into_the_layer() {
    // A mesh painted pure red everywhere can only yield red-channel
    // energy, whatever the shading multipliers do.
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
    let indices = vec![[0, 1, 2], [1, 3, 2]];
    let colours = vec![Vec3::X; 4];
    let mut mesh = TriangleMesh::new(positions, indices)
        .expect("valid mesh")
        .with_colours(colours)
        .expect("colours fit");
    let config = LayerConfig {
        count: 256,
        ..LayerConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(137);
    let layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");

    for colour in layer.colours() {
        assert!(colour.x > 0.0);
        assert_eq!(colour.y, 0.0);
        assert_eq!(colour.z, 0.0);
    }
}
