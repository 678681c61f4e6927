use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

use constants::{DeformationParams, LayerConfig};
use particle_veil_core::deform::{self, FrameUniforms};
use particle_veil_core::{InteractionState, MorphMode, TriangleMesh, build_layer, displace};

fn small_layer(seed: u64) -> particle_veil_core::PointLayer {
    let config = LayerConfig {
        count: 512,
        ..LayerConfig::default()
    };
    let mut mesh = TriangleMesh::unit_cube();
    let mut rng = StdRng::seed_from_u64(seed);
    build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds")
}

#[test]
fn layer_pass_matches_per_point_evaluation() {
    let params = DeformationParams::default();
    let mut interaction = InteractionState::new(&params);
    interaction.pointer_hit(Vec3::new(0.1, 0.0, 0.2));
    for _ in 0..5 {
        interaction.tick();
    }
    let uniforms = FrameUniforms::at(2.25, &interaction, MorphMode::Model, 0.0);

    let mut layer = small_layer(201);
    deform::displace_all(&mut layer, &uniforms, &params);
    for (position, base) in layer.positions().iter().zip(layer.base_positions()) {
        assert_eq!(*position, displace(*base, &uniforms, &params));
    }
}

#[test]
fn displacement_never_accumulates() {
    let params = DeformationParams::default();
    let uniforms = FrameUniforms::idle(4.0);
    let mut layer = small_layer(203);

    deform::displace_all(&mut layer, &uniforms, &params);
    let first_pass = layer.positions().to_vec();
    for _ in 0..10 {
        deform::displace_all(&mut layer, &uniforms, &params);
    }
    assert_eq!(layer.positions(), first_pass.as_slice());
}

#[test]
fn idle_field_stays_within_jitter_envelope() {
    let params = DeformationParams::default();
    let uniforms = FrameUniforms::idle(7.3);
    let mut layer = small_layer(207);
    deform::displace_all(&mut layer, &uniforms, &params);

    for (position, base) in layer.positions().iter().zip(layer.base_positions()) {
        let offset = *position - *base;
        assert!(offset.x.abs() <= params.jitter_amplitude + 1e-7);
        assert!(offset.y.abs() <= params.jitter_amplitude + 1e-7);
        assert!(offset.z.abs() <= params.jitter_amplitude + 1e-7);
    }
}

#[test]
fn active_pointer_only_moves_points_in_radius() {
    let params = DeformationParams {
        jitter_amplitude: 0.0,
        ..DeformationParams::default()
    };
    let mut interaction = InteractionState::new(&params);
    interaction.pointer_hit(Vec3::new(0.5, 0.5, 0.5));
    for _ in 0..600 {
        interaction.tick();
    }
    let uniforms = FrameUniforms::at(0.0, &interaction, MorphMode::Model, 0.0);
    assert!(uniforms.pointer_active);

    let config = LayerConfig {
        count: 4_096,
        ..LayerConfig::default()
    };
    let mut mesh = TriangleMesh::unit_cube();
    let mut rng = StdRng::seed_from_u64(211);
    let mut layer = build_layer(&mut mesh, &config, Vec3::ONE, &mut rng).expect("layer builds");
    deform::displace_all(&mut layer, &uniforms, &params);

    let mut pushed = 0usize;
    for (position, base) in layer.positions().iter().zip(layer.base_positions()) {
        let moved = *position != *base;
        if base.distance(uniforms.pointer) >= params.radius {
            assert!(!moved, "point outside the radius moved: {base}");
        } else if moved {
            pushed += 1;
        }
    }
    assert!(pushed > 0);
}

#[test]
fn morph_blend_reaches_the_sphere() {
    let params = DeformationParams {
        jitter_amplitude: 0.0,
        ..DeformationParams::default()
    };
    let uniforms = FrameUniforms::at(
        0.0,
        &InteractionState::new(&params),
        MorphMode::Sphere,
        1.0,
    );
    let mut layer = small_layer(213);
    deform::displace_all(&mut layer, &uniforms, &params);

    for position in layer.positions() {
        assert!((position.length() - 0.9).abs() < 1e-4, "{position}");
    }
}

#[test]
fn scan_band_brightens_colour_where_it_passes() {
    let params = DeformationParams::default();
    let mut uniforms = FrameUniforms::idle(0.0);
    uniforms.scan_strength = 0.9;
    uniforms.edge_pulse = 0.0;
    uniforms.mask_phase = 5.0;

    // Scan centre sits at sin(0) * 0.9 = 0 when time is zero.
    let on_band = deform::modulate_colour(Vec3::ONE, Vec3::ZERO, &uniforms, &params);
    let off_band = deform::modulate_colour(
        Vec3::ONE,
        Vec3::new(0.0, std::f32::consts::PI, 0.0),
        &uniforms,
        &params,
    );
    assert!(on_band.x > off_band.x);
    assert!(on_band.length() > off_band.length());
}
