use thiserror::Error;

/// Core error type shared across the daily word crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record field is missing or blank.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Convenience alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
