use glam::Quat;

/// Source models are authored Z-up; the renderer is Y-up.
/// Default: -90° X rotation (Z→Y, -Y→Z, X=X)
pub const MODEL_ROTATION_X: f32 = -std::f32::consts::FRAC_PI_2;

/// Rotation applied to every loaded model to ensure consistency.
pub fn model_rotation() -> Quat {
    Quat::from_rotation_x(MODEL_ROTATION_X)
}
