use crate::{
    merge::ConsistencyError,
    store::{ExportError, LoadError},
};

/// Errors caused by how the tool was invoked.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Exactly one output file must be specified.")]
    OutputCount(usize),
    #[error("No input files specified.")]
    NoInputs,
}

/// Broad classification of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Usage,
    Load,
    Consistency,
    Export,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Load(_) => ErrorKind::Load,
            Self::Consistency(_) => ErrorKind::Consistency,
            Self::Export(_) => ErrorKind::Export,
        }
    }
}
