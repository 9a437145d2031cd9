/// Errors raised when a mesh disagrees with the rest of a batch about its skeleton.
#[derive(Debug, thiserror::Error)]
pub enum ConsistencyError {
    #[error("skeletal mismatch: mesh {mesh:?} has no skeleton, but the batch is bound to {expected:?}; cannot merge.")]
    MissingSkeleton { mesh: String, expected: String },
    #[error("skeletal mismatch: mesh {mesh:?} has skeleton {found:?}, but earlier meshes have none; cannot merge.")]
    UnexpectedSkeleton { mesh: String, found: String },
    #[error("skeletal mismatch: mesh {mesh:?} has skeleton {found:?}, but the batch is bound to {expected:?}; cannot merge.")]
    SkeletonMismatch {
        mesh: String,
        expected: String,
        found: String,
    },
}
