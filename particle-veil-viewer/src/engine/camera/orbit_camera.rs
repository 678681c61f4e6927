use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::{CAMERA_MAX_DISTANCE_FACTOR, CAMERA_MIN_DISTANCE_FACTOR};

/// Orbit state around the framed model. The camera entity eases
/// towards the pose this resource describes.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub focus: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Head-on framing at the fitted distance, with dolly limits
    /// derived from it.
    pub fn framed(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            focus: Vec3::ZERO,
            min_distance: distance * CAMERA_MIN_DISTANCE_FACTOR,
            max_distance: distance * CAMERA_MAX_DISTANCE_FACTOR,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::framed(2.0)
    }
}

/// Right-drag orbits, the wheel dollies, and the camera transform
/// eases towards the target pose for damped motion.
pub fn camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        orbit.yaw += -mouse_delta.x * yaw_sens;
        orbit.pitch += -mouse_delta.y * pitch_sens;
        orbit.pitch = orbit.pitch.clamp(-1.55, 1.55);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if scroll_accum.abs() > f32::EPSILON {
        let dolly = 1.0 - scroll_accum * 0.1;
        orbit.distance = (orbit.distance * dolly).clamp(orbit.min_distance, orbit.max_distance);
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = orbit.focus + target_rot * Vec3::new(0.0, 0.0, orbit.distance);

    let lerp_speed = 12.0 * time.delta_secs();
    transform.translation = transform.translation.lerp(target_pos, lerp_speed.min(1.0));
    transform.rotation = transform.rotation.slerp(target_rot, lerp_speed.min(1.0));
}
