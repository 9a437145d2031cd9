use std::collections::HashMap;

use hedron::{Mesh, Skeleton};

use super::{ExportError, LoadError, MeshStore};

/// Keeps resources in memory, keyed by name.
///
/// Exported meshes are kept apart from loadable ones, so exporting never changes what a later
/// load returns.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    meshes: HashMap<String, Mesh>,
    skeletons: HashMap<String, Skeleton>,
    exported: HashMap<String, Mesh>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `mesh` loadable as `name`, returning whatever was there before.
    pub fn insert_mesh(&mut self, name: impl Into<String>, mesh: Mesh) -> Option<Mesh> {
        self.meshes.insert(name.into(), mesh)
    }

    /// Make `skeleton` loadable as `name`, returning whatever was there before.
    pub fn insert_skeleton(
        &mut self,
        name: impl Into<String>,
        skeleton: Skeleton,
    ) -> Option<Skeleton> {
        self.skeletons.insert(name.into(), skeleton)
    }

    pub fn exported(&self, name: &str) -> Option<&Mesh> {
        self.exported.get(name)
    }

    pub fn take_exported(&mut self, name: &str) -> Option<Mesh> {
        self.exported.remove(name)
    }

    pub fn num_exported(&self) -> usize {
        self.exported.len()
    }
}

impl MeshStore for MemoryStore {
    fn load_mesh(&self, name: &str) -> Result<Mesh, LoadError> {
        self.meshes
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(name.to_owned()))
    }

    fn load_skeleton(&self, name: &str) -> Result<Skeleton, LoadError> {
        self.skeletons
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(name.to_owned()))
    }

    fn export_mesh(&mut self, mesh: &Mesh, name: &str) -> Result<(), ExportError> {
        self.exported.insert(name.to_owned(), mesh.clone());
        Ok(())
    }
}
