use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for lexis operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without path context.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Filesystem operation failed on a specific path.
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt failed or was closed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Directory has nothing to choose from.
    #[error("Nothing to select in {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// Definition file is not valid TOML.
    #[error("Failed to parse definitions in {}: {source}", path.display())]
    DefinitionParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Filesystem { action, path: path.into(), source }
    }

    pub fn prompt<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::Filesystem { source: err, .. } => err.kind(),
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::EmptyDirectory(_) => io::ErrorKind::NotFound,
            AppError::DefinitionParse { .. } | AppError::Json(_) => io::ErrorKind::InvalidData,
        }
    }
}
