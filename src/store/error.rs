use std::{io, path::PathBuf};

use super::FormatError;

/// Errors encountered while reading a mesh or skeleton.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no resource named {0:?}")]
    NotFound(String),
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to decode {name:?}: {source}")]
    Decode { name: String, source: FormatError },
    #[error("{name:?} is not a {expected} resource (found {found:?})")]
    BadMagic {
        name: String,
        expected: &'static str,
        found: String,
    },
    #[error("{name:?} has version {found}, but only version {supported} is supported")]
    UnsupportedVersion {
        name: String,
        found: u32,
        supported: u32,
    },
}

/// Errors encountered while writing a mesh.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to encode {name:?}: {source}")]
    Encode { name: String, source: FormatError },
}
