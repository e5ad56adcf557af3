use thiserror::Error;

/// Error type covering snapshot loading and period construction failures.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unsupported snapshot schema version {0}")]
    UnsupportedSchema(u64),
    #[error("Invalid period bounds: {0}")]
    InvalidPeriod(String),
}
