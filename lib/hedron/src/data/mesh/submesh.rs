use crate::{BoneAssignment, BoneAssignments, IndexData, VertexData};

/// The method by which indices are interpreted as topological primitives
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationType {
    PointList = 1,
    LineList = 2,
    LineStrip = 3,
    #[default]
    TriangleList = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl OperationType {
    #[inline]
    pub fn is_triangles(self) -> bool {
        matches!(
            self,
            Self::TriangleList | Self::TriangleStrip | Self::TriangleFan
        )
    }
}

/// A partition of a mesh's geometry drawn with a single material.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubMesh {
    /// If set, this submesh indexes into its mesh's shared vertex data and `vertex_data` is unused.
    pub use_shared_vertices: bool,
    /// Vertices owned exclusively by this submesh
    pub vertex_data: Option<VertexData>,
    pub index_data: IndexData,
    pub operation: OperationType,
    material_name: String,
    bone_assignments: Vec<BoneAssignment>,
}

impl SubMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    pub fn set_material_name(&mut self, name: impl Into<String>) {
        self.material_name = name.into();
    }

    pub fn add_bone_assignment(&mut self, assignment: BoneAssignment) {
        self.bone_assignments.push(assignment);
    }

    pub fn bone_assignments(&self) -> BoneAssignments<'_> {
        self.bone_assignments.iter().copied()
    }

    pub fn num_bone_assignments(&self) -> usize {
        self.bone_assignments.len()
    }

    /// The vertex indices of each triangle described by this submesh, in winding order.
    ///
    /// Degenerate triangles (those repeating a vertex) are dropped. Submeshes without triangle
    /// topology have no triangles.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let idx = self.index_data.iter().collect::<Vec<u32>>();
        let tris: Vec<[u32; 3]> = match self.operation {
            OperationType::TriangleList => idx.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect(),
            OperationType::TriangleStrip => idx
                .windows(3)
                .enumerate()
                // every other triangle in a strip is wound backwards
                .map(|(i, t)| {
                    if i % 2 == 0 {
                        [t[0], t[1], t[2]]
                    } else {
                        [t[1], t[0], t[2]]
                    }
                })
                .collect(),
            OperationType::TriangleFan => match idx.split_first() {
                Some((&hub, rest)) => rest.windows(2).map(|t| [hub, t[0], t[1]]).collect(),
                None => Vec::new(),
            },
            OperationType::PointList | OperationType::LineList | OperationType::LineStrip => {
                Vec::new()
            }
        };
        tris.into_iter()
            .filter(|[a, b, c]| a != b && b != c && a != c)
            .collect()
    }
}
