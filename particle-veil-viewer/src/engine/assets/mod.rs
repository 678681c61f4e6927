//! Asset types loaded from the `assets/` directory.

/// Visual configuration asset. Mirrors the JSON structure exactly.
pub mod visual_config;
