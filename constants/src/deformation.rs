use serde::{Deserialize, Serialize};

/// Tunables for the pointer deformation field and the procedural
/// animation bands. One instance is shared by every point layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformationParams {
    /// World-space radius of the pointer influence sphere.
    pub radius: f32,
    /// Peak displacement applied at the centre of the influence sphere.
    pub strength: f32,
    /// Amplitude of the per-point idle jitter.
    pub jitter_amplitude: f32,
    /// Base angular speed of the jitter oscillators.
    pub jitter_speed: f32,
    /// Sharpness of the travelling scan band.
    pub scan_width: f32,
    /// Half-width of the visible depth slice.
    pub slice_width: f32,
    /// Per-tick lerp factor pulling the smoothed pointer towards its target.
    pub position_smoothing: f32,
    /// Per-tick lerp factor pulling the smoothed push direction towards its target.
    pub direction_smoothing: f32,
    /// Per-tick lerp factor easing the morph blend amount.
    pub morph_smoothing: f32,
}

impl Default for DeformationParams {
    fn default() -> Self {
        DEFAULT_DEFORMATION
    }
}

pub const DEFAULT_DEFORMATION: DeformationParams = DeformationParams {
    radius: 0.18,
    strength: 0.08,
    jitter_amplitude: 0.006,
    jitter_speed: 0.9,
    scan_width: 1.4,
    slice_width: 0.28,
    position_smoothing: 0.12,
    direction_smoothing: 0.18,
    morph_smoothing: 0.06,
};

/// Squared-length floor below which a pointer movement carries no
/// usable direction and the previous one is kept.
pub const DIRECTION_EPSILON: f32 = 1e-6;
