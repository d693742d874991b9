// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankMapError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Symbol map not found at {path} (run `rankmap scan` first)")]
    MapMissing { path: PathBuf },

    #[error("Symbol map at {path} is corrupt: {source} (run `rankmap scan` to regenerate)")]
    MapCorrupt {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RankMapError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True when a persisted artifact is absent or unreadable and has to be regenerated.
    #[must_use]
    pub fn is_stale_artifact(&self) -> bool {
        matches!(self, Self::MapMissing { .. } | Self::MapCorrupt { .. })
    }
}

pub type Result<T> = std::result::Result<T, RankMapError>;

// Allow `?` on std::io::Error by converting to RankMapError::Io with unknown path.
impl From<std::io::Error> for RankMapError {
    fn from(source: std::io::Error) -> Self {
        RankMapError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

