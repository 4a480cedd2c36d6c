//! Error types shared across lottie-embed crates.

use std::path::PathBuf;

/// Top-level error type for lottie-embed operations.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Schema error: {message}")]
    Schema { message: String },

    #[error("Only {embedded} of {total} assets could be resolved")]
    PartialResolution { embedded: usize, total: usize },

    #[error("Backup failed at {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Write failed at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using EmbedError.
pub type EmbedResult<T> = Result<T, EmbedError>;

impl EmbedError {
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether the run failed before a document was available.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::Parse { .. } | Self::Schema { .. }
        )
    }
}
