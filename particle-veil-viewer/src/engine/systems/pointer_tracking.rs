use bevy::prelude::*;
use particle_veil_core::Ray;

use crate::engine::scene::session::{PointerState, RenderSession};

/// Projects the cursor into the scene and feeds the interaction state.
///
/// A hit on any layer retargets the push; a miss keeps the previous
/// target so the deformation does not snap; a cursor outside the
/// window deactivates the push entirely.
pub fn update_pointer_target(
    session: Res<RenderSession>,
    mut pointer: ResMut<PointerState>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Some(cursor) = window.cursor_position() else {
        pointer.0.pointer_left();
        return;
    };

    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };
    let world_ray = Ray::new(ray.origin, *ray.direction);
    if let Some(hit) = session.raycast(&world_ray) {
        pointer.0.pointer_hit(hit.point);
    }
}
