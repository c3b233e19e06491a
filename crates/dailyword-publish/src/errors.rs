use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while patching or writing the host document.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("document not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("marker not found in document: {marker}")]
    MarkerNotFound { marker: String },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}
