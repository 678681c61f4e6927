use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::CONFIG_ASSET_PATH;

use crate::engine::assets::visual_config::VisualConfig;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<VisualConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    config_loader.handle = Some(asset_server.load(CONFIG_ASSET_PATH));
}

/// Promote the loaded configuration to a resource, or fall back to the
/// compiled defaults when the file is missing or malformed.
pub fn resolve_visual_config(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<VisualConfig>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
) {
    if loading_progress.config_resolved {
        return;
    }
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    if let Some(config) = configs.get(handle) {
        println!("✓ Visual configuration loaded");
        commands.insert_resource(config.clone());
        loading_progress.config_resolved = true;
        return;
    }

    if let Some(LoadState::Failed(_)) = asset_server.get_load_state(handle.id()) {
        warn!(
            "Could not load {}, falling back to built-in visual defaults",
            CONFIG_ASSET_PATH
        );
        commands.insert_resource(VisualConfig::default());
        loading_progress.config_resolved = true;
    }
}
