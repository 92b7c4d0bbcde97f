//! Error types for eplib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while snapshotting a repository
#[derive(Error, Debug)]
pub enum EpError {
    /// Path does not exist or cannot be resolved
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Directory is not inside a git working tree
    #[error("{} is not in a git repository", .0.display())]
    NotARepository(PathBuf),

    /// Git operation error
    #[error("git error: {0}")]
    GitError(String),

    /// Failed to read a file
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid content regular expression
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Writing the rendered output failed
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// Failed to encode a JSON record
    #[error("failed to encode JSON record: {0}")]
    Json(#[from] serde_json::Error),
}

impl EpError {
    /// Whether this error means the file vanished before it could be read.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EpError::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
