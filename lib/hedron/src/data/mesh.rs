mod bone;
mod edge;
mod index;
mod submesh;
mod vertex;

pub use bone::*;
pub use edge::*;
pub use index::*;
pub use submesh::*;
pub use vertex::*;

use std::{collections::BTreeMap, sync::Arc};

use crate::{Aabb, Animation, Error, Skeleton};

/// A set of submeshes, the vertex data they may share, and the animations that deform them.
///
/// # Characteristics
///
/// * Submeshes are ordered; their position is their identity within the mesh.
/// * A submesh may be named. Names map to exactly one submesh, but nothing prevents a name from
///   being reassigned, at which point the previous holder becomes anonymous.
/// * A mesh may name a skeleton. The [Skeleton] itself is resolved by whoever loads the mesh and
///   is shared, never owned.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    name: String,
    skeleton_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    skeleton: Option<Arc<Skeleton>>,
    submeshes: Vec<SubMesh>,
    submesh_names: BTreeMap<String, usize>,
    /// Vertices available to every submesh with `use_shared_vertices` set
    pub shared_vertex_data: Option<VertexData>,
    shared_bone_assignments: Vec<BoneAssignment>,
    animations: Vec<Animation>,
    bounds: Aabb,
    bounding_radius: f32,
    edge_list: Option<EdgeData>,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // skeleton

    /// Whether this mesh declares a skeleton, resolved or not.
    #[inline]
    pub fn has_skeleton(&self) -> bool {
        self.skeleton_name.is_some()
    }

    pub fn skeleton_name(&self) -> Option<&str> {
        self.skeleton_name.as_deref()
    }

    /// The resolved skeleton, if one has been [bound](Mesh::bind_skeleton).
    pub fn skeleton(&self) -> Option<&Arc<Skeleton>> {
        self.skeleton.as_ref()
    }

    /// Declare the name of this mesh's skeleton. Drops the bound skeleton unless its name matches.
    pub fn set_skeleton_name(&mut self, name: Option<String>) {
        if self.skeleton.as_ref().map(|s| s.name()) != name.as_deref() {
            self.skeleton = None;
        }
        self.skeleton_name = name;
    }

    /// Bind a resolved skeleton, declaring its name as well.
    pub fn bind_skeleton(&mut self, skeleton: Arc<Skeleton>) {
        self.skeleton_name = Some(skeleton.name().to_owned());
        self.skeleton = Some(skeleton);
    }

    // submeshes

    pub fn submeshes(&self) -> &[SubMesh] {
        &self.submeshes
    }

    #[inline]
    pub fn num_submeshes(&self) -> usize {
        self.submeshes.len()
    }

    pub fn submesh(&self, index: usize) -> Option<&SubMesh> {
        self.submeshes.get(index)
    }

    pub fn submesh_mut(&mut self, index: usize) -> Option<&mut SubMesh> {
        self.submeshes.get_mut(index)
    }

    pub fn submesh_by_name(&self, name: &str) -> Option<&SubMesh> {
        self.submesh_index(name).and_then(|i| self.submeshes.get(i))
    }

    /// Append an anonymous submesh.
    pub fn create_submesh(&mut self) -> &mut SubMesh {
        let index = self.submeshes.len();
        self.submeshes.push(SubMesh::new());
        &mut self.submeshes[index]
    }

    /// Append a submesh and name it `name`, taking the name from any submesh that held it.
    pub fn create_named_submesh(&mut self, name: impl Into<String>) -> &mut SubMesh {
        let index = self.submeshes.len();
        self.submeshes.push(SubMesh::new());
        self.submesh_names.insert(name.into(), index);
        &mut self.submeshes[index]
    }

    /// Assign `name` to the submesh at `index`.
    pub fn name_submesh(&mut self, name: impl Into<String>, index: usize) -> Result<(), Error> {
        if index >= self.submeshes.len() {
            return Err(Error::SubMeshOutOfRange {
                index,
                count: self.submeshes.len(),
            });
        }
        self.submesh_names.insert(name.into(), index);
        Ok(())
    }

    pub fn submesh_index(&self, name: &str) -> Option<usize> {
        self.submesh_names.get(name).copied()
    }

    /// Find the name of the submesh at `index`, if it has one.
    ///
    /// This is a reverse lookup over the name map; should more than one name map to `index`, the
    /// first in lexical order is returned.
    pub fn submesh_name(&self, index: usize) -> Option<&str> {
        self.submesh_names
            .iter()
            .find_map(|(name, &i)| (i == index).then_some(name.as_str()))
    }

    pub fn submesh_names(&self) -> impl Iterator<Item = (&str, usize)> {
        self.submesh_names.iter().map(|(n, i)| (n.as_str(), *i))
    }

    /// Rename the submesh currently named `from`.
    pub fn rename_submesh(&mut self, from: &str, to: impl Into<String>) -> Result<(), Error> {
        let index = self
            .submesh_names
            .remove(from)
            .ok_or_else(|| Error::UnknownSubMesh(from.to_owned()))?;
        self.submesh_names.insert(to.into(), index);
        Ok(())
    }

    /// Replace material `from` with `to` on every submesh, returning the number of submeshes changed.
    pub fn rename_material(&mut self, from: &str, to: &str) -> usize {
        let mut count = 0;
        for sub in self
            .submeshes
            .iter_mut()
            .filter(|s| s.material_name() == from)
        {
            sub.set_material_name(to);
            count += 1;
        }
        count
    }

    // shared geometry

    /// Bind a vertex of the shared vertex data to a bone.
    pub fn add_bone_assignment(&mut self, assignment: BoneAssignment) {
        self.shared_bone_assignments.push(assignment);
    }

    /// Bone assignments of the shared vertex data.
    pub fn bone_assignments(&self) -> BoneAssignments<'_> {
        self.shared_bone_assignments.iter().copied()
    }

    /// Bone assignments of the shared vertex data plus those of every submesh.
    pub fn total_bone_assignments(&self) -> usize {
        self.shared_bone_assignments.len()
            + self
                .submeshes
                .iter()
                .map(SubMesh::num_bone_assignments)
                .sum::<usize>()
    }

    // animations

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animation(name).is_some()
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.name() == name)
    }

    /// Get the animation named `name`, creating it with length `length` if it doesn't exist.
    ///
    /// The length of an existing animation is left alone.
    pub fn animation_or_insert(&mut self, name: &str, length: f32) -> &mut Animation {
        let index = match self.animations.iter().position(|a| a.name() == name) {
            Some(i) => i,
            None => {
                self.animations.push(Animation::new(name, length));
                self.animations.len() - 1
            }
        };
        &mut self.animations[index]
    }

    // bounds

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Set the bounding box, deriving the bounding radius from it.
    pub fn set_bounds(&mut self, bounds: Aabb) {
        self.bounding_radius = bounds.bounding_radius();
        self.bounds = bounds;
    }

    // derived data

    pub fn edge_list(&self) -> Option<&EdgeData> {
        self.edge_list.as_ref()
    }

    /// (Re)build the edge list from the current topology.
    pub fn build_edge_list(&mut self) -> &EdgeData {
        let edges = EdgeData::build(self);
        self.edge_list.insert(edges)
    }
}
