use thiserror::Error;

pub type Result<T> = std::result::Result<T, VeilError>;

/// Failures surfaced while preparing point layers from a mesh.
#[derive(Debug, Error)]
pub enum VeilError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("{attribute} count {actual} does not match vertex count {expected}")]
    AttributeLength {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("mesh surface area is zero or not finite")]
    DegenerateSurface,
}
