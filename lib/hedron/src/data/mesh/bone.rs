/// A weighted binding of a vertex to a skeleton bone.
///
/// `vertex_index` is relative to whichever vertex data the assignment is scoped to: a submesh's
/// dedicated vertices, or the mesh's shared vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneAssignment {
    pub vertex_index: u32,
    pub bone_index: u16,
    pub weight: f32,
}

impl BoneAssignment {
    #[inline]
    pub fn new(vertex_index: u32, bone_index: u16, weight: f32) -> Self {
        Self {
            vertex_index,
            bone_index,
            weight,
        }
    }
}

/// A restartable iterator over bone assignments; clone it to walk the sequence again.
pub type BoneAssignments<'m> = std::iter::Copied<std::slice::Iter<'m, BoneAssignment>>;
