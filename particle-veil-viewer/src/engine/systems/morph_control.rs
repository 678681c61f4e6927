use bevy::prelude::*;
use particle_veil_core::MorphMode;

/// Active morph target and the eased blend towards it.
#[derive(Resource, Default)]
pub struct MorphState {
    pub mode: MorphMode,
    pub amount: f32,
}

impl MorphState {
    /// Ease the blend towards the active target: zero for the model
    /// pose, one for any procedural target.
    pub fn tick(&mut self, smoothing: f32) {
        let target = if self.mode == MorphMode::Model {
            0.0
        } else {
            1.0
        };
        self.amount += (target - self.amount) * smoothing;
    }
}

/// Handle morph target switching via keyboard input.
pub fn morph_control_system(mut morph: ResMut<MorphState>, keyboard: Res<ButtonInput<KeyCode>>) {
    let mut mode_changed = false;
    let mut new_mode = morph.mode;

    if keyboard.just_pressed(KeyCode::Digit1) {
        new_mode = MorphMode::Model;
        mode_changed = true;
        println!("Morph target: Model");
    }

    if keyboard.just_pressed(KeyCode::Digit2) {
        new_mode = MorphMode::Sphere;
        mode_changed = true;
        println!("Morph target: Sphere");
    }

    if keyboard.just_pressed(KeyCode::Digit3) {
        new_mode = MorphMode::Torus;
        mode_changed = true;
        println!("Morph target: Torus");
    }

    if keyboard.just_pressed(KeyCode::Digit4) {
        new_mode = MorphMode::Line;
        mode_changed = true;
        println!("Morph target: Line");
    }

    if mode_changed {
        morph.mode = new_mode;
    }
}
