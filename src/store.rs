//! Loading meshes & skeletons from named resources, and exporting merged meshes to them.

mod error;
mod file;
mod format;
mod memory;

pub use error::*;
pub use file::*;
pub use format::*;
pub use memory::*;

use hedron::{Mesh, Skeleton};

/// Source of input meshes and skeletons, and sink for merged meshes.
pub trait MeshStore {
    /// Load the mesh stored under `name`.
    ///
    /// The returned mesh may name a skeleton, but isn't bound to one.
    fn load_mesh(&self, name: &str) -> Result<Mesh, LoadError>;

    /// Load the skeleton stored under `name`.
    fn load_skeleton(&self, name: &str) -> Result<Skeleton, LoadError>;

    /// Store `mesh` under `name`, replacing whatever was there.
    fn export_mesh(&mut self, mesh: &Mesh, name: &str) -> Result<(), ExportError>;
}

impl<S: MeshStore + ?Sized> MeshStore for &mut S {
    fn load_mesh(&self, name: &str) -> Result<Mesh, LoadError> {
        (**self).load_mesh(name)
    }

    fn load_skeleton(&self, name: &str) -> Result<Skeleton, LoadError> {
        (**self).load_skeleton(name)
    }

    fn export_mesh(&mut self, mesh: &Mesh, name: &str) -> Result<(), ExportError> {
        (**self).export_mesh(mesh, name)
    }
}
