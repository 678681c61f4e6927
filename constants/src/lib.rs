//! Shared tunables for the particle veil workspace.
//! Values here are the single source of truth for both the CPU
//! evaluation path and the shader uniforms.
pub mod coordinate_system;
pub mod deformation;
pub mod layers;
pub mod scene;

pub use coordinate_system::model_rotation;
pub use deformation::{DeformationParams, DEFAULT_DEFORMATION, DIRECTION_EPSILON};
pub use layers::{
    LayerConfig, ATTEMPT_CAP_FACTOR, DEFAULT_LAYER, EDGE_LAYER, FALLBACK_POINT_COLOUR, GHOST_LAYER,
    GHOST_OFFSET, INNER_LAYER, SURFACE_LAYER,
};
pub use scene::{
    CAMERA_FIT_MARGIN, CAMERA_FOV_DEGREES, CAMERA_MAX_DISTANCE_FACTOR, CAMERA_MIN_DISTANCE_FACTOR,
    CLEAR_COLOUR, CONFIG_ASSET_PATH, MODEL_ASSET_PATH, MODEL_FIT_SIZE, RAYCAST_TOLERANCE,
    SPRITE_SCALE,
};
