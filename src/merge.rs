//! Combining a batch of meshes into one.

mod bounds;
mod error;

pub use bounds::*;
pub use error::*;

use std::sync::Arc;

use hedron::{
    Animation, Mesh, Skeleton, SubMesh, TrackTarget, VertexAnimationType, VertexData, VertexTrack,
};

use crate::{Context, SkeletonRegistry};

/// Accepts meshes one at a time and merges them into a single mesh.
///
/// # Characteristics
///
/// * Every mesh in a batch agrees on its skeleton: either none of them has one, or all of them
///   refer to the same [Skeleton] instance.
/// * Inputs are borrowed until the next [merge](Self::merge); the merged mesh is owned by the
///   caller.
/// * The base skeleton outlives the batch. Call [clear](Self::clear) to forget it.
#[derive(Debug)]
pub struct MeshMerger<'ctx> {
    skeletons: &'ctx SkeletonRegistry,
    base_skeleton: Option<Arc<Skeleton>>,
    meshes: Vec<&'ctx Mesh>,
}

impl<'ctx> MeshMerger<'ctx> {
    pub fn new(skeletons: &'ctx SkeletonRegistry) -> Self {
        Self {
            skeletons,
            base_skeleton: None,
            meshes: Vec::new(),
        }
    }

    pub fn from_context(ctx: &'ctx Context) -> Self {
        Self::new(&ctx.skeletons)
    }

    /// The skeleton every mesh in the batch must share, if any has been adopted.
    pub fn base_skeleton(&self) -> Option<&Arc<Skeleton>> {
        self.base_skeleton.as_ref()
    }

    /// Meshes waiting to be merged, in insertion order.
    pub fn meshes(&self) -> &[&'ctx Mesh] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop the current batch, keeping the base skeleton.
    pub fn reset(&mut self) {
        self.meshes.clear();
    }

    /// Drop the current batch and the base skeleton.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.base_skeleton = None;
    }

    /// The skeleton bound to `mesh`, or, failing that, the registered skeleton it names.
    fn resolve_skeleton(&self, mesh: &Mesh) -> Option<Arc<Skeleton>> {
        mesh.skeleton().cloned().or_else(|| {
            mesh.skeleton_name()
                .and_then(|name| self.skeletons.get_by_name(name))
                .cloned()
        })
    }

    /// Append `mesh` to the batch.
    ///
    /// # Errors
    ///
    /// Fails, leaving the batch untouched, if `mesh` disagrees with the batch about its skeleton.
    pub fn add_mesh(&mut self, mesh: &'ctx Mesh) -> Result<(), ConsistencyError> {
        let skeleton = self.resolve_skeleton(mesh);
        match (&skeleton, &self.base_skeleton) {
            (None, Some(base)) => {
                return Err(ConsistencyError::MissingSkeleton {
                    mesh: mesh.name().to_owned(),
                    expected: base.name().to_owned(),
                })
            }
            (Some(found), None) if !self.meshes.is_empty() => {
                return Err(ConsistencyError::UnexpectedSkeleton {
                    mesh: mesh.name().to_owned(),
                    found: found.name().to_owned(),
                })
            }
            (Some(found), Some(base)) if !Arc::ptr_eq(found, base) => {
                return Err(ConsistencyError::SkeletonMismatch {
                    mesh: mesh.name().to_owned(),
                    expected: base.name().to_owned(),
                    found: found.name().to_owned(),
                })
            }
            _ => {}
        }

        if self.base_skeleton.is_none() {
            if let Some(skeleton) = skeleton {
                tracing::debug!("Set: base skeleton ({})", skeleton.name());
                self.base_skeleton = Some(skeleton);
            }
        }

        self.meshes.push(mesh);
        Ok(())
    }

    /// Merge every mesh in the batch into a new mesh named `name`, then empty the batch.
    ///
    /// Submeshes keep their input order, inputs are taken in insertion order. Only the first
    /// shared vertex block encountered is kept, and only morph tracks are carried over.
    #[tracing::instrument(skip(self), fields(inputs = self.meshes.len()))]
    pub fn merge(&mut self, name: &str) -> Mesh {
        tracing::debug!("Baking: New Mesh started");

        let mut out = Mesh::new(name);
        if let Some(skeleton) = &self.base_skeleton {
            out.bind_skeleton(skeleton.clone());
        }
        let skinned = self.base_skeleton.is_some();

        let mut bounds = BoundsAccumulator::new();
        for mesh in self.meshes.drain(..) {
            let offset = out.num_submeshes();

            for (index, sub) in mesh.submeshes().iter().enumerate() {
                let sub_name = mesh.submesh_name(index);
                tracing::debug!(
                    "Baking: adding submesh '{}' with material {}",
                    sub_name.unwrap_or_default(),
                    sub.material_name()
                );
                let new = match sub_name {
                    Some(sub_name) => out.create_named_submesh(sub_name),
                    None => out.create_submesh(),
                };
                copy_submesh(sub, new, skinned);
            }

            let adopts_shared = mesh.shared_vertex_data.is_some() && out.shared_vertex_data.is_none();

            for anim in mesh.animations() {
                tracing::debug!("Baking: adding vertex animation {}", anim.name());
                merge_animation(&mut out, mesh, anim, offset, adopts_shared);
            }

            if let Some(shared) = &mesh.shared_vertex_data {
                if adopts_shared {
                    out.shared_vertex_data = Some(shared.deep_clone());
                } else {
                    tracing::debug!(
                        mesh = mesh.name(),
                        "shared vertex data already present; keeping the first block"
                    );
                }
                if skinned {
                    for assignment in mesh.bone_assignments() {
                        out.add_bone_assignment(assignment);
                    }
                }
            }

            bounds.merge(mesh.bounds());
        }

        out.set_bounds(bounds.finish());
        out.build_edge_list();
        tracing::debug!("Baking: Finished");
        out
    }
}

fn copy_submesh(from: &SubMesh, to: &mut SubMesh, skinned: bool) {
    to.use_shared_vertices = from.use_shared_vertices;
    to.operation = from.operation;
    to.index_data = from.index_data.clone();
    if !from.use_shared_vertices {
        to.vertex_data = from.vertex_data.as_ref().map(VertexData::deep_clone);
    }
    if skinned {
        for assignment in from.bone_assignments() {
            to.add_bone_assignment(assignment);
        }
    }
    to.set_material_name(from.material_name());
}

/// Carry the morph tracks of `anim` over to the animation of the same name on `out`.
fn merge_animation(out: &mut Mesh, mesh: &Mesh, anim: &Animation, offset: usize, adopts_shared: bool) {
    let merged = out.animation_or_insert(anim.name(), anim.length());
    for track in anim.vertex_tracks() {
        if track.animation_type() != VertexAnimationType::Morph {
            tracing::trace!(
                animation = anim.name(),
                target = ?track.target(),
                ty = ?track.animation_type(),
                "skipping non-morph track"
            );
            continue;
        }

        let target = match track.target() {
            TrackTarget::SubMesh(i) if i < mesh.num_submeshes() => TrackTarget::SubMesh(offset + i),
            TrackTarget::SharedGeometry if adopts_shared => TrackTarget::SharedGeometry,
            other => {
                tracing::warn!(
                    "Skipped: track {:?} of animation {} in mesh {} has no merged geometry to deform.",
                    other,
                    anim.name(),
                    mesh.name()
                );
                continue;
            }
        };

        // keyframe buffers are shared with the input
        let mut new = VertexTrack::morph(target, track.morph_keyframes().to_vec());
        new.associated_vertex_data = track
            .associated_vertex_data
            .as_ref()
            .map(VertexData::deep_clone);
        merged.insert_vertex_track(new);
    }
}
