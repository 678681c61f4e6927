//! Scene-level resources shared between loading and runtime systems.

/// Built point layers, their materials and the pointer state.
pub mod session;
