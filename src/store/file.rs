use std::{
    fs,
    path::{Path, PathBuf},
};

use hedron::{Mesh, Skeleton};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{ExportError, Format, LoadError, MeshStore};

pub const MESH_MAGIC: &str = "meshmerge::mesh";
pub const SKELETON_MAGIC: &str = "meshmerge::skeleton";
/// Current resource version; nothing else is accepted.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Header {
    magic: String,
    version: u32,
}

impl Header {
    fn check(self, name: &str, expected: &'static str) -> Result<(), LoadError> {
        if self.magic != expected {
            return Err(LoadError::BadMagic {
                name: name.to_owned(),
                expected,
                found: self.magic,
            });
        }
        if self.version != FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                name: name.to_owned(),
                found: self.version,
                supported: FORMAT_VERSION,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'p, T> {
    magic: &'static str,
    version: u32,
    payload: &'p T,
}

#[derive(Debug, Deserialize)]
struct OwnedEnvelope<T> {
    magic: String,
    version: u32,
    payload: T,
}

/// Stores resources as files, in a [Format] chosen by extension.
///
/// Names that aren't found as given are looked up in each search path, in order.
#[derive(Debug, Clone, Default)]
pub struct FileMeshStore {
    search_paths: Vec<PathBuf>,
}

impl FileMeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_paths(search_paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_paths: search_paths.into_iter().collect(),
        }
    }

    /// Append `path` to the search paths, unless it's already present.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the file backing `name`.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Some(direct.to_owned());
        }
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|path| path.is_file())
    }

    fn load<T: DeserializeOwned>(&self, name: &str, magic: &'static str) -> Result<T, LoadError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| LoadError::NotFound(name.to_owned()))?;
        tracing::trace!(?path, "reading {magic}");
        let bytes = fs::read(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let format = Format::from_path(&path);
        let envelope: OwnedEnvelope<T> = match format.decode(&bytes) {
            Ok(envelope) => envelope,
            Err(source) => {
                // prefer reporting a foreign or outdated resource over the decode failure it causes
                if let Ok(header) = format.decode::<Header>(&bytes) {
                    header.check(name, magic)?;
                }
                return Err(LoadError::Decode {
                    name: name.to_owned(),
                    source,
                });
            }
        };
        Header {
            magic: envelope.magic,
            version: envelope.version,
        }
        .check(name, magic)?;
        Ok(envelope.payload)
    }

    fn store<T: Serialize>(
        path: &Path,
        name: &str,
        magic: &'static str,
        payload: &T,
    ) -> Result<(), ExportError> {
        let bytes = Format::from_path(path)
            .encode(&Envelope {
                magic,
                version: FORMAT_VERSION,
                payload,
            })
            .map_err(|source| ExportError::Encode {
                name: name.to_owned(),
                source,
            })?;
        fs::write(path, bytes).map_err(|source| ExportError::Io {
            path: path.to_owned(),
            source,
        })
    }

    /// Write `skeleton` to the file `name`.
    pub fn export_skeleton(&self, skeleton: &Skeleton, name: &str) -> Result<(), ExportError> {
        Self::store(Path::new(name), name, SKELETON_MAGIC, skeleton)
    }
}

impl MeshStore for FileMeshStore {
    fn load_mesh(&self, name: &str) -> Result<Mesh, LoadError> {
        self.load(name, MESH_MAGIC)
    }

    fn load_skeleton(&self, name: &str) -> Result<Skeleton, LoadError> {
        self.load(name, SKELETON_MAGIC)
    }

    fn export_mesh(&mut self, mesh: &Mesh, name: &str) -> Result<(), ExportError> {
        Self::store(Path::new(name), name, MESH_MAGIC, mesh)
    }
}
