/// Asset path of the model the viewer loads at startup.
pub const MODEL_ASSET_PATH: &str = "models/relic.glb";

/// Asset path of the optional JSON visual configuration.
pub const CONFIG_ASSET_PATH: &str = "config/visual.json";

/// Background colour, sRGB bytes.
pub const CLEAR_COLOUR: (u8, u8, u8) = (11, 14, 19);

/// Largest model dimension after framing.
pub const MODEL_FIT_SIZE: f32 = 1.1;

/// Vertical field of view of the viewer camera, degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Margin applied when fitting the camera distance to the model.
pub const CAMERA_FIT_MARGIN: f32 = 1.05;

/// Dolly limits as multiples of the fitted camera distance.
pub const CAMERA_MIN_DISTANCE_FACTOR: f32 = 0.2;
pub const CAMERA_MAX_DISTANCE_FACTOR: f32 = 6.0;

/// World-space perpendicular distance within which a pointer ray
/// counts a point as hit.
pub const RAYCAST_TOLERANCE: f32 = 0.05;

/// Converts a configured point size to a world-space sprite diameter
/// at the default camera framing.
pub const SPRITE_SCALE: f32 = 0.23;
