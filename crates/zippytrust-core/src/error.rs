use thiserror::Error;

/// Shared error type for the ZippyCoin trust engine.
///
/// Scoring itself is total over `f64` and never fails; these variants
/// cover configuration loading, input parsing, and CLI lookups.
#[derive(Debug, Error)]
pub enum TrustError {
    /// Invalid or unreadable engine configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for TrustError {
    fn from(e: serde_json::Error) -> Self {
        TrustError::Serialization(e.to_string())
    }
}
