//! Encoding & decoding of stored resources.

use std::path::Path;

/// Errors raised by a [Format]'s codec.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Bincode(#[from] bincode::Error),
    #[error(transparent)]
    RonEncode(#[from] ron::Error),
    #[error(transparent)]
    RonDecode(#[from] ron::error::SpannedError),
    #[error("RON document is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Compact binary
    #[default]
    Bincode,
    /// Human-readable text
    Ron,
}

impl Format {
    /// Pick a format by file extension: `.ron` is [Format::Ron], anything else is
    /// [Format::Bincode].
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Bincode,
        }
    }

    pub fn encode<T: serde::Serialize>(self, value: &T) -> Result<Vec<u8>, FormatError> {
        Ok(match self {
            Self::Bincode => bincode::serialize(value)?,
            Self::Ron => {
                ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?.into_bytes()
            }
        })
    }

    pub fn decode<T: serde::de::DeserializeOwned>(self, bytes: &[u8]) -> Result<T, FormatError> {
        Ok(match self {
            Self::Bincode => bincode::deserialize(bytes)?,
            Self::Ron => ron::from_str(std::str::from_utf8(bytes)?)?,
        })
    }
}
