use crate::VertexElementSemantic;

/// Errors related to building or editing mesh data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex size must be non-zero")]
    ZeroVertexSize,
    #[error("buffer of {len} bytes does not hold a whole number of {vertex_size}-byte vertices")]
    PartialVertex { len: usize, vertex_size: usize },
    #[error("no vertex buffer bound at source {0}")]
    UnboundSource(u16),
    #[error("vertex declaration has no {0:?} element of type Vec3<F32>")]
    MissingElement(VertexElementSemantic),
    #[error("vertex {vertex} reads past the end of the buffer bound at source {binding}")]
    ElementOutOfBounds { binding: u16, vertex: usize },
    #[error("no submesh named {0:?}")]
    UnknownSubMesh(String),
    #[error("submesh index out of range: 0..{count} ∌ {index}")]
    SubMeshOutOfRange { index: usize, count: usize },
    #[error("cannot add a {found:?} keyframe to a {expected:?} track")]
    KeyFrameType {
        expected: crate::VertexAnimationType,
        found: crate::VertexAnimationType,
    },
    #[error("skeleton already has a bone named {0:?}")]
    DuplicateBone(String),
    #[error("skeleton has no bone with handle {0}")]
    UnknownBone(u16),
    #[error("skeleton already has a bone for every handle")]
    TooManyBones,
    #[error("{count} vertices of {vertex_size} bytes don't fit in memory")]
    BufferTooLarge { vertex_size: usize, count: usize },
}
