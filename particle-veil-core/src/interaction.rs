use glam::Vec3;

use constants::{DIRECTION_EPSILON, DeformationParams};

/// Smoothed pointer state feeding the deformation field.
///
/// Surface hits snap the targets; the values the evaluator reads ease
/// towards them by a fixed fraction per tick, so pointer motion
/// arrives at the cloud with a short lag instead of a hard jump.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    target_point: Vec3,
    smoothed_point: Vec3,
    target_direction: Vec3,
    smoothed_direction: Vec3,
    active: bool,
    position_smoothing: f32,
    direction_smoothing: f32,
}

impl InteractionState {
    pub fn new(params: &DeformationParams) -> Self {
        Self {
            target_point: Vec3::ZERO,
            smoothed_point: Vec3::ZERO,
            target_direction: Vec3::X,
            smoothed_direction: Vec3::X,
            active: false,
            position_smoothing: params.position_smoothing,
            direction_smoothing: params.direction_smoothing,
        }
    }

    /// Records a surface hit in model space. The push direction only
    /// follows movements larger than the epsilon, so a stationary
    /// pointer keeps its last direction instead of collapsing to zero.
    pub fn pointer_hit(&mut self, point: Vec3) {
        let previous = self.target_point;
        self.target_point = point;
        let delta = point - previous;
        if delta.length_squared() > DIRECTION_EPSILON {
            self.target_direction = delta.normalize();
        }
        self.active = true;
    }

    /// Pointer left the render surface. Targets are retained so the
    /// field fades out in place.
    pub fn pointer_left(&mut self) {
        self.active = false;
    }

    /// Advances the smoothed values one tick. Runs every frame whether
    /// or not the pointer moved.
    pub fn tick(&mut self) {
        self.smoothed_point = self
            .smoothed_point
            .lerp(self.target_point, self.position_smoothing);
        let blended = self
            .smoothed_direction
            .lerp(self.target_direction, self.direction_smoothing);
        let direction = blended.normalize_or_zero();
        if direction != Vec3::ZERO {
            self.smoothed_direction = direction;
        }
    }

    pub fn point(&self) -> Vec3 {
        self.smoothed_point
    }

    pub fn direction(&self) -> Vec3 {
        self.smoothed_direction
    }

    pub fn target(&self) -> Vec3 {
        self.target_point
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(&DeformationParams::default())
    }
}
