use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub config_resolved: bool,
    pub model_requested: bool,
    pub cloud_built: bool,
    pub load_failed: bool,
}
