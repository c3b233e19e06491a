use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading the dataset or drawing from it.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("dataset not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("dataset is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
    #[error("dataset has no eligible rows ({skipped} incomplete row(s) skipped)")]
    EmptyDataset { skipped: usize },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
