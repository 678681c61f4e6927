use glam::Vec3;

use constants::DeformationParams;

use crate::interaction::InteractionState;
use crate::layer::PointLayer;
use crate::morph::{self, MorphMode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shader-style fract, non-negative for negative inputs.
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Shader-style smoothstep, a clamped Hermite ramp.
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn band(x: f32) -> f32 {
    (-(x * x)).exp()
}

/// Deterministic scalar in [0, 1) derived from a position.
///
/// Mirrors the vertex-stage hash literal for literal so the CPU path
/// and the shader wobble each point identically.
pub fn position_hash(p: Vec3) -> f32 {
    let q = Vec3::new(
        fract(p.x * 0.3183099 + 0.1),
        fract(p.y * 0.3183099 + 0.2),
        fract(p.z * 0.3183099 + 0.3),
    ) * 17.0;
    fract(q.x * q.y * q.z * (q.x + q.y + q.z))
}

/// Read-only evaluator inputs for one frame: oscillating band phases
/// plus the smoothed pointer. The evaluator has no clock of its own;
/// every time-dependent value arrives through this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub mask_phase: f32,
    pub scan_speed: f32,
    pub scan_strength: f32,
    pub slice_position: f32,
    pub density_pulse: f32,
    pub edge_pulse: f32,
    pub pointer: Vec3,
    pub push_direction: Vec3,
    pub pointer_active: bool,
    pub morph_mode: MorphMode,
    pub morph_amount: f32,
}

impl FrameUniforms {
    /// Band phases are closed-form in elapsed time, so any frame can
    /// be reproduced from its timestamp alone.
    pub fn at(
        time: f32,
        interaction: &InteractionState,
        morph_mode: MorphMode,
        morph_amount: f32,
    ) -> Self {
        Self {
            time,
            mask_phase: (time * 0.6).sin() * 0.8,
            scan_speed: 0.6 + 0.2 * (time * 0.2).sin(),
            scan_strength: 0.6 + 0.3 * (time * 0.4).sin(),
            slice_position: (time * 0.35).sin() * 0.35,
            density_pulse: 0.25 + 0.25 * (time * 0.9).sin(),
            edge_pulse: 0.35 + 0.35 * (time * 0.7).sin(),
            pointer: interaction.point(),
            push_direction: interaction.direction(),
            pointer_active: interaction.is_active(),
            morph_mode,
            morph_amount,
        }
    }

    /// Uniforms with no pointer influence and no morph, for tests and
    /// warm-up frames.
    pub fn idle(time: f32) -> Self {
        Self::at(time, &InteractionState::default(), MorphMode::Model, 0.0)
    }
}

/// Idle jitter offset for a point with hash `h`. Three independent
/// sinusoids, phase-shifted by the hash, give each point a stable
/// closed wobble path.
pub fn jitter_offset(h: f32, time: f32, params: &DeformationParams) -> Vec3 {
    let speed = params.jitter_speed;
    Vec3::new(
        (time * speed + h * 6.2831).sin(),
        (time * speed * 1.3 + h * 9.4247).sin(),
        (time * speed * 1.7 + h * 12.566).sin(),
    ) * params.jitter_amplitude
}

/// Pointer push displacement evaluated at `position`. Quadratic
/// falloff inside the influence radius, zero outside or when the
/// pointer is inactive.
pub fn pointer_push(position: Vec3, uniforms: &FrameUniforms, params: &DeformationParams) -> Vec3 {
    if !uniforms.pointer_active {
        return Vec3::ZERO;
    }
    let falloff = (1.0 - position.distance(uniforms.pointer) / params.radius).clamp(0.0, 1.0);
    if falloff <= 0.0 {
        return Vec3::ZERO;
    }
    let push_direction = (uniforms.push_direction + Vec3::splat(1e-6)).normalize();
    push_direction * falloff * falloff * params.strength
}

/// Displaced position of one point: morph-blended rest position, plus
/// jitter, plus the pointer push measured at the jittered location.
pub fn displace(base: Vec3, uniforms: &FrameUniforms, params: &DeformationParams) -> Vec3 {
    let rest = morph::rest_position(base, uniforms.morph_mode, uniforms.morph_amount);
    let jittered = rest + jitter_offset(position_hash(base), uniforms.time, params);
    jittered + pointer_push(jittered, uniforms, params)
}

/// Colour after the animated band treatment: dimmed base, mask band,
/// travelling scan band, edge echo stripes, then a height-graded
/// blue/teal tint and a slow drift term.
pub fn modulate_colour(
    colour: Vec3,
    displaced: Vec3,
    uniforms: &FrameUniforms,
    params: &DeformationParams,
) -> Vec3 {
    let mut c = colour * 0.75;

    let mask = band((displaced.y - uniforms.mask_phase) * 1.2);
    c = c.lerp(c * 1.2, mask);

    let scan_centre = (uniforms.time * uniforms.scan_speed).sin() * 0.9;
    let scan = band((displaced.y - scan_centre) * params.scan_width);
    c = c.lerp(c * 1.35, scan * uniforms.scan_strength);

    let echo = band((displaced.x.abs() - 0.35) * 3.2);
    c = c.lerp(c * 1.35, echo * uniforms.edge_pulse);

    let drift = 0.04 * (uniforms.time * 0.7 + displaced.y * 2.0).sin();
    let gradient = ((displaced.y + 0.9) / 1.8).clamp(0.0, 1.0);
    let tint = Vec3::new(0.18, 0.26, 0.45).lerp(Vec3::new(0.14, 0.34, 0.38), gradient);
    c.lerp(tint, 0.35) + Vec3::splat(drift)
}

/// Sprite alpha at normalised corner radius `sprite_radius` (0 at the
/// centre, 0.5 at the inscribed circle edge). Combines the circular
/// falloff, the layer opacity, the density pulse and the travelling
/// depth slice window.
pub fn sprite_alpha(
    displaced: Vec3,
    sprite_radius: f32,
    opacity: f32,
    uniforms: &FrameUniforms,
    params: &DeformationParams,
) -> f32 {
    let falloff = 1.0 - smoothstep(0.0, 0.5, sprite_radius);
    let slice = 1.0
        - smoothstep(
            0.0,
            params.slice_width,
            (displaced.y - uniforms.slice_position).abs(),
        );
    falloff * opacity * (0.7 + uniforms.density_pulse) * slice
}

/// Recomputes every current position in the layer from its rest
/// position. Points are independent, so the pass parallelises freely.
#[cfg(feature = "parallel")]
pub fn displace_all(layer: &mut PointLayer, uniforms: &FrameUniforms, params: &DeformationParams) {
    let (bases, positions) = layer.displacement_slices();
    positions
        .par_iter_mut()
        .zip(bases.par_iter())
        .for_each(|(position, base)| *position = displace(*base, uniforms, params));
}

#[cfg(not(feature = "parallel"))]
pub fn displace_all(layer: &mut PointLayer, uniforms: &FrameUniforms, params: &DeformationParams) {
    let (bases, positions) = layer.displacement_slices();
    for (position, base) in positions.iter_mut().zip(bases) {
        *position = displace(*base, uniforms, params);
    }
}
