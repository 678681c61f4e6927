use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::{CAMERA_FOV_DEGREES, CLEAR_COLOUR};

use crate::engine::assets::visual_config::VisualConfig;
use crate::engine::camera::orbit_camera::camera_controller;
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, resolve_visual_config, start_loading};
use crate::engine::loading::model_loader::{
    ModelLoader, build_point_layers_when_ready, start_model_load,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::render::point_material::PointSpriteMaterial;
use crate::engine::systems::frame_driver::drive_frame_uniforms;
use crate::engine::systems::morph_control::{MorphState, morph_control_system};
use crate::engine::systems::pointer_tracking::update_pointer_target;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<PointSpriteMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers VisualConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<VisualConfig>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<MorphState>()
        .insert_resource(ClearColor(Color::srgb_u8(
            CLEAR_COLOUR.0,
            CLEAR_COLOUR.1,
            CLEAR_COLOUR.2,
        )));

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                resolve_visual_config,
                start_model_load,
                build_point_layers_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        camera_controller,
        morph_control_system,
        // The raycast must see this frame's pointer before the
        // uniforms are written.
        (update_pointer_target, drive_frame_uniforms).chain(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
