use crate::PlacementId;
use catalog::CatalogId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = DesignError> = std::result::Result<T, E>;

/// Everything that can go wrong in the design core.
///
/// All variants are recoverable; callers surface them as a message and carry on.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("design \"{0}\" not found")]
    NotFound(String),

    #[error("design file {} is corrupt: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode design \"{name}\": {reason}")]
    Encoding { name: String, reason: String },

    #[error("{0} is not enabled")]
    Unsupported(&'static str),

    #[error("unknown catalog item {0}")]
    UnknownCatalogItem(CatalogId),

    #[error("no placed item {0}")]
    UnknownPlacement(PlacementId),
}

impl DesignError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::CorruptData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
