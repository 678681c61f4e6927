//! Mesh-to-point-cloud conversion and the per-point deformation field.
//!
//! The pipeline runs in two phases. At load time a triangle mesh is
//! converted into several fixed-size point layers, each sampled
//! area-uniformly from the surface and shaded from its geometry. Per
//! frame a pure function of rest position, hash and shared uniforms
//! produces the displaced position, colour and alpha for every point;
//! the same function backs both the CPU path and the shader.

pub mod bounds;
pub mod deform;
pub mod error;
pub mod interaction;
pub mod layer;
pub mod mesh;
pub mod morph;
pub mod raycast;
pub mod sampler;

pub use bounds::Bounds3;
pub use constants::{DeformationParams, LayerConfig};
pub use deform::{FrameUniforms, displace, position_hash};
pub use error::{Result, VeilError};
pub use interaction::InteractionState;
pub use layer::{PointLayer, build_layer};
pub use mesh::TriangleMesh;
pub use morph::MorphMode;
pub use raycast::{PointHit, Ray, intersect_layer, intersect_layers};
pub use sampler::{SurfacePoint, SurfaceSampler};
