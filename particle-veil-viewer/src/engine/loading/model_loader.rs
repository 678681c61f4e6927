use bevy::asset::LoadState;
use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use rand::SeedableRng;
use rand::rngs::StdRng;

use constants::{
    CAMERA_FIT_MARGIN, CAMERA_FOV_DEGREES, MODEL_FIT_SIZE, RAYCAST_TOLERANCE, model_rotation,
};
use particle_veil_core::{InteractionState, TriangleMesh, build_layer};

use crate::engine::assets::visual_config::VisualConfig;
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::loading::mesh_convert::triangle_mesh_from_bevy;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::render::point_material::PointSpriteMaterial;
use crate::engine::render::sprite_mesh::sprite_mesh_for_layer;
use crate::engine::scene::session::{LayerRuntime, PointerState, RenderSession};

#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Gltf>>,
}

/// Kick off the GLTF load once the configuration is resolved.
pub fn start_model_load(
    config: Option<Res<VisualConfig>>,
    mut model_loader: ResMut<ModelLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_requested {
        return;
    }
    let Some(config) = config else {
        return;
    };
    println!("Loading model {}", config.model_path);
    model_loader.handle = Some(asset_server.load(config.model_path.as_str()));
    loading_progress.model_requested = true;
}

/// Build and spawn the point layers once the model is in memory.
///
/// The first primitive with usable positions stands in for the whole
/// scene, mirroring a traversal that stops at the first mesh. A failed
/// load is reported once and leaves the scene empty.
pub fn build_point_layers_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    model_loader: Res<ModelLoader>,
    config: Option<Res<VisualConfig>>,
    gltfs: Res<Assets<Gltf>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    standard_materials: Res<Assets<StandardMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<PointSpriteMaterial>>,
    asset_server: Res<AssetServer>,
    windows: Query<&Window>,
    mut commands: Commands,
) {
    if loading_progress.cloud_built || loading_progress.load_failed {
        return;
    }
    let Some(config) = config else {
        return;
    };
    let Some(ref handle) = model_loader.handle else {
        return;
    };

    let Some(gltf) = gltfs.get(handle) else {
        if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle.id()) {
            error!("Could not load {}: {}", config.model_path, error);
            loading_progress.load_failed = true;
        }
        return;
    };

    let mut source: Option<(TriangleMesh, Vec3)> = None;
    'search: for gltf_mesh_handle in &gltf.meshes {
        let Some(gltf_mesh) = gltf_meshes.get(gltf_mesh_handle) else {
            continue;
        };
        for primitive in &gltf_mesh.primitives {
            let Some(mesh) = meshes.get(&primitive.mesh) else {
                continue;
            };
            if let Some(triangle_mesh) = triangle_mesh_from_bevy(mesh) {
                let tint = primitive
                    .material
                    .as_ref()
                    .and_then(|material| standard_materials.get(material))
                    .map(|material| {
                        let linear = material.base_color.to_linear();
                        Vec3::new(linear.red, linear.green, linear.blue)
                    })
                    .unwrap_or(config.fallback_colour);
                source = Some((triangle_mesh, tint));
                break 'search;
            }
        }
    }
    let Some((mut triangle_mesh, fallback_colour)) = source else {
        error!("No usable mesh found in {}", config.model_path);
        loading_progress.load_failed = true;
        return;
    };

    // One seeded stream across all four layers keeps rebuilds
    // reproducible for a given configuration.
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut clouds = Vec::with_capacity(config.layers().len());
    for layer_config in config.layers() {
        match build_layer(&mut triangle_mesh, layer_config, fallback_colour, &mut rng) {
            Ok(cloud) => clouds.push(cloud),
            Err(error) => {
                error!("Point layer construction failed: {error}");
                loading_progress.load_failed = true;
                return;
            }
        }
    }
    if let Some(ghost) = clouds.last_mut() {
        ghost.translate(config.ghost_offset);
    }

    // Centre the model at the origin at a fixed display size, with the
    // source's Z-up axis rotated into the renderer's Y-up frame.
    let bounds = triangle_mesh.bounds();
    let max_dimension = bounds.max_dimension();
    let scale = if max_dimension > 0.0 {
        MODEL_FIT_SIZE / max_dimension
    } else {
        1.0
    };
    let rotation = model_rotation();
    let framing = Transform {
        translation: -(rotation * (bounds.center() * scale)),
        rotation,
        scale: Vec3::splat(scale),
    };

    let mut layers = Vec::with_capacity(clouds.len());
    for cloud in clouds {
        let mesh_handle = meshes.add(sprite_mesh_for_layer(&cloud));
        let material_handle =
            materials.add(PointSpriteMaterial::for_layer(cloud.config(), &config.deform));
        let entity = commands
            .spawn((
                Mesh3d(mesh_handle),
                MeshMaterial3d(material_handle.clone()),
                framing,
                NoFrustumCulling,
            ))
            .id();
        layers.push(LayerRuntime {
            cloud,
            material: material_handle,
            entity,
        });
    }

    let aspect = windows
        .single()
        .map(|window| window.width() / window.height())
        .unwrap_or(1.0);
    let fitted_size = (rotation * (bounds.size() * scale)).abs();
    let half_fov_tan = (CAMERA_FOV_DEGREES.to_radians() * 0.5).tan();
    let fit_height_distance = fitted_size.y * 0.5 / half_fov_tan;
    let fit_width_distance = fitted_size.x * 0.5 / (half_fov_tan * aspect);
    let distance = CAMERA_FIT_MARGIN * fit_height_distance.max(fit_width_distance).max(1.0);
    commands.insert_resource(OrbitCamera::framed(distance));

    let session = RenderSession {
        layers,
        local_from_world: framing.compute_matrix().inverse(),
        local_tolerance: RAYCAST_TOLERANCE / scale,
    };
    println!(
        "✓ Built {} point layers ({} points)",
        session.layers.len(),
        session.point_count()
    );
    commands.insert_resource(PointerState(InteractionState::new(&config.deform)));
    commands.insert_resource(session);
    loading_progress.cloud_built = true;
}
